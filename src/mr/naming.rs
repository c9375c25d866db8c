use std::path::{Path, PathBuf};

/// Name of the intermediate file written by map task `map_task` for shard `shard`.
pub fn shard_file_name(job_name: &str, map_task: usize, shard: usize) -> String {
    format!("mrtmp.{}-{}-{}", job_name, map_task, shard)
}

pub fn shard_file_path(dir: &Path, job_name: &str, map_task: usize, shard: usize) -> PathBuf {
    dir.join(shard_file_name(job_name, map_task, shard))
}

/// All intermediate files the reduce task for `shard` has to read, one per map task.
pub fn shard_files_for(dir: &Path, job_name: &str, n_map: usize, shard: usize) -> Vec<PathBuf> {
    (0..n_map)
        .map(|map_task| shard_file_path(dir, job_name, map_task, shard))
        .collect()
}

/// Job names end up inside file names, so they must be a single path component.
pub(crate) fn valid_job_name(job_name: &str) -> bool {
    !job_name.is_empty()
        && job_name != "."
        && job_name != ".."
        && !job_name.contains(['/', '\\', '\0'])
}
