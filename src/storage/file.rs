//! On-disk storage: one JSON file per key under a data directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::storage::{KeyValueStorage, StorageError};

/// File-backed key-value storage.
///
/// Each key maps to `<dir>/<key>.json`. Writes go through a temp file and
/// a rename so a crash mid-write never leaves a half-written value behind.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        let write = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };
        fs::write(&temp_path, value).map_err(write)?;
        fs::rename(&temp_path, &path).map_err(write)?;

        tracing::debug!(key, bytes = value.len(), "persisted key");
        Ok(())
    }
}
