#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
extern crate fnv;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

#[cfg(test)]
extern crate uuid;

pub mod errors {
    error_chain! {
        foreign_links {
            Io(::std::io::Error);
            Json(::serde_json::Error);
        }
    }
}

pub mod emitter;
pub mod intermediate;
pub mod io;
pub mod mapper;
pub mod partition;
pub mod runner;

pub use emitter::EmitIntermediate;
pub use emitter::IntermediateVecEmitter;
pub use errors::*;
pub use intermediate::reduce_name;
pub use mapper::{KeyValue, Map, MapInputKV};
pub use partition::{HashPartitioner, Partition};
pub use runner::{run_map_task, MapTask, MapTaskOptions};

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
