//! Storage errors

use std::path::PathBuf;
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed store file: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}
