//! On-disk format of intermediate shard files.
//!
//! Each record is one JSON object on its own line: `{"Key":"...","Value":"..."}`.
//! JSON string escaping keeps newlines and quotes inside keys and values from
//! ever being mistaken for a record boundary.

use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::KeyValue;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("reading shard file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading records: {0}")]
    Read(#[source] std::io::Error),
    #[error("malformed record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Serializes one record, trailing newline included.
pub fn encode_record(kv: &KeyValue) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = serde_json::to_vec(kv)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn decode_record(line: &str) -> Result<KeyValue, serde_json::Error> {
    serde_json::from_str(line)
}

/// Decodes every record from `reader`, in file order. Blank lines are skipped.
pub async fn decode_records<R>(reader: R) -> Result<Vec<KeyValue>, CodecError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut out = vec![];
    let mut lineno = 0;
    while let Some(line) = lines.next_line().await.map_err(CodecError::Read)? {
        lineno += 1;
        if line.trim().is_empty() {
            continue;
        }
        let kv = decode_record(&line).map_err(|source| CodecError::Malformed {
            line: lineno,
            source,
        })?;
        out.push(kv);
    }
    Ok(out)
}

pub async fn read_records(path: impl AsRef<Path>) -> Result<Vec<KeyValue>, CodecError> {
    let path = path.as_ref();
    let file = File::open(path).await.map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_records(BufReader::new(file))
        .await
        .map_err(|e| match e {
            CodecError::Read(source) => CodecError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
}
