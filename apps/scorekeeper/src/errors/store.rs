//! Persistence errors surfaced by `crate::storage::GameStore` implementations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("unsupported record version {found} (expected {expected})")]
    UnsupportedVersion { found: u64, expected: u32 },
    #[error("stored game is corrupt: {0}")]
    Corrupt(String),
    #[error("save slot is locked by another process: {0}")]
    Locked(PathBuf),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
