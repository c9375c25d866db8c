use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncWriteExt as _, BufWriter};

use super::codec::encode_record;
use super::naming::{shard_file_path, valid_job_name};
use super::shard::select_shard;
use super::{KeyValue, MapFn, MapTaskError};

/// One map task: a single input partition routed into `n_shards` intermediate files.
#[derive(Debug, Clone)]
pub struct MapTask {
    pub job_name: String,
    pub task_index: usize,
    pub input: PathBuf,
    pub n_shards: usize,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardOutput {
    pub shard: usize,
    pub path: PathBuf,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTaskOutput {
    pub job_name: String,
    pub task_index: usize,
    pub outputs: Vec<ShardOutput>,
}

impl MapTaskOutput {
    pub fn total_records(&self) -> usize {
        self.outputs.iter().map(|o| o.records).sum()
    }
}

struct ShardWriter {
    shard: usize,
    path: PathBuf,
    out: BufWriter<File>,
    records: usize,
}

impl MapTask {
    pub fn new(
        job_name: impl Into<String>,
        task_index: usize,
        input: impl Into<PathBuf>,
        n_shards: usize,
    ) -> Self {
        MapTask {
            job_name: job_name.into(),
            task_index,
            input: input.into(),
            n_shards,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn shard_path(&self, shard: usize) -> PathBuf {
        shard_file_path(&self.output_dir, &self.job_name, self.task_index, shard)
    }

    /// Reads the input, runs `mapf` over it once and writes every record to
    /// the shard file picked by its key. Shard files from an earlier run of the
    /// same task are overwritten.
    ///
    /// On error, shard files already created are flushed and left on disk;
    /// they must not be treated as valid output.
    pub async fn run<M>(&self, mapf: &M) -> Result<MapTaskOutput, MapTaskError>
    where
        M: MapFn + ?Sized,
    {
        log::info!(
            "map task {}#{}: input = {}, n_shards = {}",
            self.job_name,
            self.task_index,
            self.input.display(),
            self.n_shards
        );
        let res = self.run_inner(mapf).await;
        match &res {
            Ok(out) => log::info!(
                "map task {}#{}: wrote {} records to {} shards",
                self.job_name,
                self.task_index,
                out.total_records(),
                out.outputs.len()
            ),
            Err(e) => log::error!("{}", e),
        }
        res
    }

    async fn run_inner<M>(&self, mapf: &M) -> Result<MapTaskOutput, MapTaskError>
    where
        M: MapFn + ?Sized,
    {
        if !valid_job_name(&self.job_name) {
            return Err(MapTaskError::InvalidJobName {
                job: self.job_name.clone(),
            });
        }
        if self.n_shards == 0 {
            return Err(MapTaskError::InvalidShardCount {
                job: self.job_name.clone(),
                task: self.task_index,
            });
        }

        let raw = tokio::fs::read(&self.input)
            .await
            .map_err(|source| MapTaskError::InputRead {
                job: self.job_name.clone(),
                task: self.task_index,
                path: self.input.clone(),
                source,
            })?;
        log::debug!(
            "map task {}#{}: read {} bytes from {}",
            self.job_name,
            self.task_index,
            raw.len(),
            self.input.display()
        );
        // invalid UTF-8 sequences become U+FFFD
        let contents = String::from_utf8_lossy(&raw);

        let kvs = mapf.map(&self.input.to_string_lossy(), &contents);

        let mut writers = self.create_shards().await?;
        let written = self.write_records(&mut writers, &kvs).await;
        // flush everything even when a write failed; the write error wins
        let closed = self.close_shards(&mut writers).await;
        written?;
        closed?;

        Ok(MapTaskOutput {
            job_name: self.job_name.clone(),
            task_index: self.task_index,
            outputs: writers
                .into_iter()
                .map(|w| ShardOutput {
                    shard: w.shard,
                    path: w.path,
                    records: w.records,
                })
                .collect(),
        })
    }

    async fn create_shards(&self) -> Result<Vec<ShardWriter>, MapTaskError> {
        let mut writers = Vec::with_capacity(self.n_shards);
        for shard in 0..self.n_shards {
            let path = self.shard_path(shard);
            let file = File::create(&path).await.map_err(|source| MapTaskError::ShardCreate {
                job: self.job_name.clone(),
                task: self.task_index,
                shard,
                path: path.clone(),
                source,
            })?;
            log::debug!(
                "map task {}#{}: created {}",
                self.job_name,
                self.task_index,
                path.display()
            );
            writers.push(ShardWriter {
                shard,
                path,
                out: BufWriter::new(file),
                records: 0,
            });
        }
        Ok(writers)
    }

    async fn write_records(
        &self,
        writers: &mut [ShardWriter],
        kvs: &[KeyValue],
    ) -> Result<(), MapTaskError> {
        for kv in kvs {
            let w = &mut writers[select_shard(&kv.key, self.n_shards)];
            let res = match encode_record(kv) {
                Ok(buf) => w.out.write_all(&buf).await,
                Err(e) => Err(io::Error::from(e)),
            };
            res.map_err(|source| self.write_error(w.shard, &w.path, source))?;
            w.records += 1;
        }
        Ok(())
    }

    async fn close_shards(&self, writers: &mut [ShardWriter]) -> Result<(), MapTaskError> {
        let mut first_err = None;
        for w in writers.iter_mut() {
            if let Err(source) = w.out.shutdown().await {
                log::warn!(
                    "map task {}#{}: closing {} failed: {}",
                    self.job_name,
                    self.task_index,
                    w.path.display(),
                    source
                );
                if first_err.is_none() {
                    first_err = Some(self.write_error(w.shard, &w.path, source));
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn write_error(&self, shard: usize, path: &Path, source: io::Error) -> MapTaskError {
        MapTaskError::ShardWrite {
            job: self.job_name.clone(),
            task: self.task_index,
            shard,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Runs map task `map_task` of `job_name` over `in_file`, writing its
/// `n_reduce` shard files to the current directory.
pub async fn do_map<M>(
    job_name: &str,
    map_task: usize,
    in_file: impl AsRef<Path>,
    n_reduce: usize,
    mapf: &M,
) -> Result<MapTaskOutput, MapTaskError>
where
    M: MapFn + ?Sized,
{
    MapTask::new(job_name, map_task, in_file.as_ref(), n_reduce)
        .run(mapf)
        .await
}
