use std::path::Path;

use serde_json;

use errors::*;
use io;
use mapper::KeyValue;

/// `reduce_name` computes the name of the intermediate file holding one map task's output for
/// one reduce task.
///
/// The name is a pure function of its arguments and injective over `(map_index, reduce_index)`
/// for a fixed job name. The reduce-side reader computes the same name independently to locate
/// its inputs, so the format is a shared contract between the two halves of the pipeline.
pub fn reduce_name(job_name: &str, map_index: u64, reduce_index: u64) -> String {
    format!("mrtmp.{}-{}-{}", job_name, map_index, reduce_index)
}

/// `write_intermediate_file` serialises one bucket of map output pairs to the given path as a
/// JSON array of `{"key":...,"value":...}` objects, fully overwriting any prior content.
///
/// JSON is used because keys and values may contain arbitrary characters, including the
/// delimiters a line-based format would be corrupted by. An empty bucket is written as `[]`
/// rather than skipped, so every intermediate file exists for the reduce side to read.
pub fn write_intermediate_file<P: AsRef<Path>>(path: P, pairs: &[KeyValue]) -> Result<()> {
    let json = serde_json::to_vec(pairs).chain_err(
        || "Error serialising intermediate pairs to JSON.",
    )?;
    io::write(&path, &json).chain_err(|| {
        format!(
            "Error writing intermediate file {}.",
            path.as_ref().to_string_lossy()
        )
    })?;

    Ok(())
}
