use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a whole map task. None of these are retried by the executor;
/// whoever scheduled the task decides whether to run it again.
#[derive(Error, Debug)]
pub enum MapTaskError {
    #[error("map task {job}#{task}: cannot read input {}: {source}", .path.display())]
    InputRead {
        job: String,
        task: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map task {job}#{task}: cannot create shard {shard} file {}: {source}", .path.display())]
    ShardCreate {
        job: String,
        task: usize,
        shard: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map task {job}#{task}: cannot write shard {shard} file {}: {source}", .path.display())]
    ShardWrite {
        job: String,
        task: usize,
        shard: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map task {job}#{task}: shard count must be positive")]
    InvalidShardCount { job: String, task: usize },

    #[error("invalid job name {job:?}: must be a single non-empty path component")]
    InvalidJobName { job: String },
}

impl MapTaskError {
    /// Path of the file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            MapTaskError::InputRead { path, .. }
            | MapTaskError::ShardCreate { path, .. }
            | MapTaskError::ShardWrite { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
