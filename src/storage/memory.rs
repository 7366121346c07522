//! In-memory storage for tests and ephemeral runs.

use std::collections::HashMap;

use crate::storage::{KeyValueStorage, StorageError};

/// `HashMap`-backed key-value storage. Nothing is persisted beyond the
/// lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value directly, bypassing the trait. Used by tests to stage
    /// pre-existing (including malformed) stored state.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
