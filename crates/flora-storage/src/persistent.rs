//! File-based persistent storage.
//!
//! Stores one file per key under a storage directory. Reads of missing
//! files report an absent value rather than an error, so a fresh profile
//! behaves like an empty store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::KeyValueStore;
use crate::error::StorageError;

/// Persistent key-value store backed by one file per key.
#[derive(Debug)]
pub struct FileStore {
    /// Path to the storage directory
    storage_path: PathBuf,
}

impl FileStore {
    /// Creates a file store at the given directory, creating it if
    /// needed.
    pub fn new(storage_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let storage_path = storage_path.as_ref().to_path_buf();
        fs::create_dir_all(&storage_path)?;
        debug!(path = ?storage_path, "opened file store");
        Ok(Self { storage_path })
    }

    /// The file holding a key's value.
    fn key_path(&self, key: &str) -> PathBuf {
        self.storage_path.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
