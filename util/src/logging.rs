use env_logger::LogBuilder;
use error_chain::ChainedError;
use errors::*;
use std::env;

/// `init_logger` initialises process-wide logging with the given default filter.
///
/// The default is an explicit argument rather than a constant so each binary decides its own
/// verbosity; the `RUST_LOG` environment variable still takes precedence when set.
pub fn init_logger(default_config: &str) -> Result<()> {
    let builder = &mut LogBuilder::new();
    let builder = {
        match env::var("RUST_LOG") {
            Ok(log_config) => builder.parse(&log_config),
            Err(_) => builder.parse(default_config),
        }
    };

    builder.init().chain_err(|| "Failed to build env_logger")?;
    Ok(())
}

pub fn output_error<E: ChainedError>(err: &E) {
    error!("{}", err);

    for e in err.iter().skip(1) {
        error!("caused by: {}", e);
    }

    if let Some(backtrace) = err.backtrace() {
        error!("backtrace: {:?}", backtrace);
    }
}
