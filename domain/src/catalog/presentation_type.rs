//! Presentation type catalog

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named preset for a kind of presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationType {
    pub name: String,
    pub description: String,
    pub default_duration_seconds: u32,
}

impl PresentationType {
    /// Description split into display lines (`\r\n` and `\n` both break).
    pub fn description_lines(&self) -> Vec<&str> {
        self.description.lines().collect()
    }
}

/// Stored form of a type; the name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TypeEntry {
    description: String,
    #[serde(rename = "defaultTime")]
    default_time: u32,
}

/// All known presentation types keyed by name.
///
/// Serialized as `{ name: { "description", "defaultTime" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationTypeCatalog {
    types: BTreeMap<String, TypeEntry>,
}

impl PresentationTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a type by name.
    pub fn save(
        &mut self,
        name: &str,
        description: &str,
        default_duration_seconds: u32,
    ) -> Result<PresentationType, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::empty("Presentation type name"));
        }
        self.types.insert(
            name.to_string(),
            TypeEntry {
                description: description.to_string(),
                default_time: default_duration_seconds,
            },
        );
        Ok(PresentationType {
            name: name.to_string(),
            description: description.to_string(),
            default_duration_seconds,
        })
    }

    pub fn get(&self, name: &str) -> Result<PresentationType, DomainError> {
        let name = name.trim();
        self.types
            .get(name)
            .map(|entry| PresentationType {
                name: name.to_string(),
                description: entry.description.clone(),
                default_duration_seconds: entry.default_time,
            })
            .ok_or_else(|| DomainError::not_found("Presentation type", name))
    }

    pub fn delete(&mut self, name: &str) -> Result<(), DomainError> {
        let name = name.trim();
        self.types
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Presentation type", name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = PresentationType> + '_ {
        self.types.iter().map(|(name, entry)| PresentationType {
            name: name.clone(),
            description: entry.description.clone(),
            default_duration_seconds: entry.default_time,
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
