extern crate charon;
extern crate util;

use std::env;
use std::path::PathBuf;
use std::process;

use charon::*;

const MAP_OUTPUT_PARTITIONS: u64 = 15;

struct WordCountMapper;
impl Map for WordCountMapper {
    fn map<E>(&self, input: MapInputKV, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate,
    {
        for token in input.value.split(char::is_whitespace) {
            if !token.is_empty() {
                emitter.emit(token.to_owned(), "1".to_owned()).chain_err(
                    || "Error emitting map key-value pair.",
                )?;
            }
        }
        Ok(())
    }
}

fn run() -> Result<()> {
    util::init_logger("info").chain_err(
        || "Failed to initialise logging.",
    )?;

    let input_path = match env::args().nth(1) {
        Some(path) => path,
        None => return Err("Usage: word-counter <input-file>".into()),
    };

    let task = MapTask {
        job_name: "word-counter".to_owned(),
        map_index: 0,
        input_path: PathBuf::from(input_path),
        reduce_count: MAP_OUTPUT_PARTITIONS,
    };

    let wc_mapper = WordCountMapper;
    let wc_partitioner = HashPartitioner::new(MAP_OUTPUT_PARTITIONS);

    let intermediate_files = run_map_task(
        &task,
        &wc_mapper,
        &wc_partitioner,
        &MapTaskOptions::default(),
    ).chain_err(|| "Error running map task.")?;

    for file in intermediate_files {
        println!("{}", file.to_string_lossy());
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        util::output_error(&err);
        process::exit(1);
    }
}
