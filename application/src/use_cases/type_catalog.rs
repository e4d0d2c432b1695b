//! Presentation type persistence.

use crate::error::PickerError;
use crate::ports::storage::{StoragePort, keys, load_json_or_default, save_json};
use podium_domain::{PresentationType, PresentationTypeCatalog};
use std::sync::Arc;
use tracing::info;

/// Catalog loaded once at construction and written back whole on every
/// change.
pub struct TypeCatalogStore {
    storage: Arc<dyn StoragePort>,
    catalog: PresentationTypeCatalog,
}

impl TypeCatalogStore {
    pub fn load(storage: Arc<dyn StoragePort>) -> Self {
        let catalog: PresentationTypeCatalog =
            load_json_or_default(storage.as_ref(), keys::PRESENTATION_TYPES);
        info!("Loaded {} presentation type(s)", catalog.len());
        Self { storage, catalog }
    }

    pub fn save(
        &mut self,
        name: &str,
        description: &str,
        default_duration_seconds: u32,
    ) -> Result<PresentationType, PickerError> {
        let mut next = self.catalog.clone();
        let saved = next.save(name, description, default_duration_seconds)?;
        self.commit(next)?;
        Ok(saved)
    }

    pub fn get(&self, name: &str) -> Result<PresentationType, PickerError> {
        Ok(self.catalog.get(name)?)
    }

    pub fn delete(&mut self, name: &str) -> Result<(), PickerError> {
        let mut next = self.catalog.clone();
        next.delete(name)?;
        self.commit(next)
    }

    pub fn names(&self) -> Vec<String> {
        self.catalog.names().map(String::from).collect()
    }

    pub fn types(&self) -> Vec<PresentationType> {
        self.catalog.iter().collect()
    }

    /// Write `next` and adopt it only once the write succeeded.
    fn commit(&mut self, next: PresentationTypeCatalog) -> Result<(), PickerError> {
        save_json(self.storage.as_ref(), keys::PRESENTATION_TYPES, &next)?;
        self.catalog = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::storage::{FailingWrites, InMemoryStorage};

    #[test]
    fn test_save_persists_storage_shape() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut store = TypeCatalogStore::load(storage.clone());
        store.save("Lightning", "Five slides\nNo notes", 180).unwrap();

        let raw = storage.get(keys::PRESENTATION_TYPES).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["Lightning"]["defaultTime"], 180);
        assert_eq!(value["Lightning"]["description"], "Five slides\nNo notes");
    }

    #[test]
    fn test_reload_get_delete() {
        let storage = Arc::new(InMemoryStorage::new());
        let mut store = TypeCatalogStore::load(storage.clone());
        store.save("Demo", "Live coding", 600).unwrap();

        let mut reloaded = TypeCatalogStore::load(storage.clone());
        assert_eq!(reloaded.get("Demo").unwrap().default_duration_seconds, 600);
        reloaded.delete("Demo").unwrap();

        let again = TypeCatalogStore::load(storage);
        assert!(again.get("Demo").is_err());
        assert!(again.names().is_empty());
    }

    #[test]
    fn test_failed_write_keeps_previous_catalog() {
        let storage = Arc::new(FailingWrites::default());
        let mut store = TypeCatalogStore::load(storage.clone());
        store.save("Demo", "Live coding", 600).unwrap();

        storage.fail_writes();
        assert!(store.save("Demo", "Changed", 60).is_err());
        assert!(store.delete("Demo").is_err());
        assert_eq!(store.get("Demo").unwrap().default_duration_seconds, 600);
        assert_eq!(store.names(), vec!["Demo"]);
    }
}
