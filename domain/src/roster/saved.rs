//! Saved roster lists

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from list name to raw roster text.
///
/// Serialized transparently as a JSON object so the whole mapping can be
/// stored under a single key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedRosters {
    lists: BTreeMap<String, String>,
}

impl SavedRosters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a list.
    ///
    /// Both the name and the text must be non-empty after trimming. On
    /// failure the mapping is left untouched.
    pub fn save_as(&mut self, name: &str, text: &str) -> Result<(), DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::empty("List name"));
        }
        if text.trim().is_empty() {
            return Err(DomainError::empty("List content"));
        }
        self.lists.insert(name.to_string(), text.to_string());
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<&str, DomainError> {
        self.lists
            .get(name.trim())
            .map(String::as_str)
            .ok_or_else(|| DomainError::not_found("Saved list", name.trim()))
    }

    pub fn remove(&mut self, name: &str) -> Result<String, DomainError> {
        self.lists
            .remove(name.trim())
            .ok_or_else(|| DomainError::not_found("Saved list", name.trim()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lists.contains_key(name.trim())
    }

    /// List names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
