use serde::{Deserialize, Serialize};

pub mod codec;
pub mod error;
pub mod map_task;
pub mod naming;
pub mod shard;

pub use error::MapTaskError;
pub use map_task::{do_map, MapTask, MapTaskOutput, ShardOutput};
pub use naming::{shard_file_name, shard_file_path, shard_files_for};
pub use shard::select_shard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        KeyValue { key: key.into(), value: value.into() }
    }
}

/// The user's map function: input name and whole input contents in,
/// intermediate records out. Most callers pass a closure.
pub trait MapFn {
    fn map(&self, filename: &str, contents: &str) -> Vec<KeyValue>;
}

impl<F> MapFn for F
where
    F: Fn(&str, &str) -> Vec<KeyValue>,
{
    fn map(&self, filename: &str, contents: &str) -> Vec<KeyValue> {
        self(filename, contents)
    }
}
