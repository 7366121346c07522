//! Key-value persistence medium for the stores.
//!
//! The stores serialize their collections to JSON strings and hand them to
//! a [`KeyValueStorage`]; the trait seam lets the application run over the
//! on-disk [`FileStorage`] while tests use [`MemoryStorage`].

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the storage medium.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to create data directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read key {key:?}: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key {key:?}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// String-keyed storage holding one serialized value per key.
///
/// `get` of a never-written key yields `Ok(None)`; `set` replaces any
/// previous value and must be durable by the time it returns, so that a
/// store reopened over the same medium observes every prior mutation.
pub trait KeyValueStorage {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
