//! Port for key-value persistence.
//!
//! Mirrors browser local storage: string keys, string values, each mapping
//! stored whole under one key and rewritten whole on every change.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use tracing::warn;

/// Storage keys
pub mod keys {
    /// Saved roster lists: JSON object, list name → roster text
    pub const SPEAKER_LISTS: &str = "speakerLists";
    /// Active roster text, stored as a plain string
    pub const CURRENT_LIST: &str = "currentList";
    /// Presentation types: JSON object, name → `{description, defaultTime}`
    pub const PRESENTATION_TYPES: &str = "presentationTypes";
}

/// Errors reported by storage adapters
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not read '{key}' from storage: {message}")]
    Read { key: String, message: String },

    #[error("Could not write '{key}' to storage: {message}")]
    Write { key: String, message: String },

    #[error("Stored value for '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage.
///
/// Methods take `&self`; adapters use interior mutability.
pub trait StoragePort: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read a JSON-encoded mapping, treating missing, unreadable or corrupt
/// values as empty.
pub fn load_json_or_default<T>(storage: &dyn StoragePort, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!("{}", e);
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(source) => {
            warn!(
                "{}",
                StorageError::Corrupt {
                    key: key.to_string(),
                    source,
                }
            );
            T::default()
        }
    }
}

/// Serialize a whole mapping and store it under `key`.
pub fn save_json<T: Serialize>(
    storage: &dyn StoragePort,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    storage.set(key, &raw)
}

/// In-memory storage for tests and for `--no-storage` sessions.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value.
    pub fn with(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl StoragePort for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        values.remove(key);
        Ok(())
    }
}

/// In-memory storage whose writes can be switched to fail ("disk full").
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingWrites {
    inner: InMemoryStorage,
    failing: std::sync::atomic::AtomicBool,
}

#[cfg(test)]
impl FailingWrites {
    pub(crate) fn fail_writes(&self) {
        self.failing
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        if self.failing.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "disk full".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
impl StoragePort for FailingWrites {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_in_memory_roundtrip() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_corrupt_json_is_treated_as_absent() {
        let storage = InMemoryStorage::new().with(keys::SPEAKER_LISTS, "{not json");
        let lists: BTreeMap<String, String> = load_json_or_default(&storage, keys::SPEAKER_LISTS);
        assert!(lists.is_empty());
    }

    #[test]
    fn test_save_json_then_load() {
        let storage = InMemoryStorage::new();
        let mut lists = BTreeMap::new();
        lists.insert("A".to_string(), "x\ny".to_string());
        save_json(&storage, keys::SPEAKER_LISTS, &lists).unwrap();

        let back: BTreeMap<String, String> = load_json_or_default(&storage, keys::SPEAKER_LISTS);
        assert_eq!(back, lists);
    }
}
