use std::fs;
use std::path::PathBuf;

use emitter::IntermediateVecEmitter;
use errors::*;
use intermediate::{reduce_name, write_intermediate_file};
use io;
use mapper::{KeyValue, Map, MapInputKV};
use partition::{partition_pairs, Partition};

/// `MapTask` describes one map task invocation.
///
/// The descriptor is supplied by the surrounding job runner for a single call and is not
/// persisted beyond it. Tasks with distinct `map_index` values never write to the same paths,
/// so the caller may run them concurrently without any locking inside this core.
#[derive(Clone, Debug)]
pub struct MapTask {
    pub job_name: String,
    pub map_index: u64,
    pub input_path: PathBuf,
    pub reduce_count: u64,
}

/// `MapTaskOptions` is the explicit configuration for a map task invocation.
///
/// * `output_dir` - The directory intermediate files are written under. Created if missing.
/// * `log_pairs` - When set, every emitted pair is logged at debug level before partitioning.
#[derive(Clone, Debug)]
pub struct MapTaskOptions {
    pub output_dir: PathBuf,
    pub log_pairs: bool,
}

impl Default for MapTaskOptions {
    fn default() -> Self {
        MapTaskOptions {
            output_dir: PathBuf::from("."),
            log_pairs: false,
        }
    }
}

/// `run_map_task` manages one map task: it reads the input split, calls the user-defined map
/// function on its content, partitions the emitted pairs into `reduce_count` buckets, and
/// writes one intermediate file per bucket.
///
/// Every one of the `reduce_count` intermediate files is written on success, even when its
/// bucket is empty. The returned paths are in reduce index order.
///
/// Writes across the intermediate files are not transactional: when this function fails, some
/// files may be fully written while others are missing or stale from a prior run. Callers must
/// treat a failed task's output set as unreliable and re-run the whole task, or clean its
/// output, before handing the files to the reduce phase.
pub fn run_map_task<M, P>(
    task: &MapTask,
    mapper: &M,
    partitioner: &P,
    options: &MapTaskOptions,
) -> Result<Vec<PathBuf>>
where
    M: Map,
    P: Partition,
{
    if task.reduce_count == 0 {
        return Err(
            format!(
                "Invalid reduce count 0 for map task {} of job {}.",
                task.map_index,
                task.job_name
            ).into(),
        );
    }

    info!(
        "Performing map task. job={} map_index={} input={}",
        task.job_name,
        task.map_index,
        task.input_path.to_string_lossy()
    );

    let content = io::read(&task.input_path).chain_err(
        || "Error reading map input split.",
    )?;
    let input_kv = MapInputKV::new(task.input_path.to_string_lossy().into_owned(), content);

    let mut pairs: Vec<KeyValue> = Vec::new();
    mapper
        .map(input_kv, IntermediateVecEmitter::new(&mut pairs))
        .chain_err(|| "Error running map operation.")?;

    if options.log_pairs {
        for pair in &pairs {
            debug!("Map output pair. key={:?} value={:?}", pair.key, pair.value);
        }
    }

    let buckets = partition_pairs(pairs, task.reduce_count, partitioner).chain_err(
        || "Error partitioning map output.",
    )?;

    fs::create_dir_all(&options.output_dir).chain_err(|| {
        format!(
            "Failed to create output directory {}.",
            options.output_dir.to_string_lossy()
        )
    })?;

    let mut intermediate_files = Vec::new();
    for (reduce_index, bucket) in buckets.iter().enumerate() {
        let file_name = reduce_name(&task.job_name, task.map_index, reduce_index as u64);
        let file_path = options.output_dir.join(file_name);
        write_intermediate_file(&file_path, bucket).chain_err(
            || "Error writing map output.",
        )?;
        intermediate_files.push(file_path);
    }

    info!(
        "Map task completed successfully. job={} map_index={} files={}",
        task.job_name,
        task.map_index,
        intermediate_files.len()
    );

    Ok(intermediate_files)
}
