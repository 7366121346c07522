//! The two state containers: the habit store and the theme store.
//!
//! Each store owns its in-memory state, rehydrates it from storage at
//! construction, and persists every mutation synchronously before the
//! mutating operation returns.

pub mod habits;
pub mod theme;

pub use habits::HabitStore;
pub use theme::ThemeStore;

use thiserror::Error;

use crate::domain::DomainError;
use crate::storage::StorageError;

/// Errors surfaced by store operations.
///
/// Looking up a nonexistent habit is never an error; those operations
/// return `Option` or are no-ops.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("stored value under key {key:?} is malformed: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
