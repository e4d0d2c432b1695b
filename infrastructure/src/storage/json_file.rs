//! JSON file key-value storage.
//!
//! All keys live in one JSON object on disk (`{ "key": "value", ... }`).
//! Every operation reads the whole file and every mutation rewrites it.

use podium_application::{StorageError, StoragePort};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

type Entries = BTreeMap<String, String>;

/// [`StoragePort`] backed by a single JSON object file.
///
/// A missing file reads as empty and is created on the first write, along
/// with its parent directories. A corrupt file is never overwritten.
pub struct JsonFileStorage {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self, key: &str) -> Result<Entries, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    key: key.to_string(),
                    message: format!("{}: {}", self.path.display(), e),
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })
    }

    fn write_entries(&self, key: &str, entries: &Entries) -> Result<(), StorageError> {
        let write_error = |message: String| StorageError::Write {
            key: key.to_string(),
            message,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| write_error(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| write_error(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| write_error(format!("{}: {}", self.path.display(), e)))?;
        debug!("Wrote '{}' to {}", key, self.path.display());
        Ok(())
    }

    fn update<F>(&self, key: &str, mutate: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Entries),
    {
        let _guard = self.lock.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        let mut entries = self.read_entries(key)?;
        mutate(&mut entries);
        self.write_entries(key, &entries)
    }
}

impl StoragePort for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.read_entries(key)?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(key, |entries| {
            entries.remove(key);
        })
    }
}
