//! Roster persistence: the active roster text and the saved lists.

use crate::error::PickerError;
use crate::ports::storage::{StoragePort, keys, load_json_or_default, save_json};
use podium_domain::SavedRosters;
use std::sync::Arc;
use tracing::{info, warn};

/// Saved lists are loaded once at construction and written back whole on
/// every change.
pub struct RosterStore {
    storage: Arc<dyn StoragePort>,
    saved: SavedRosters,
}

impl RosterStore {
    pub fn load(storage: Arc<dyn StoragePort>) -> Self {
        let saved: SavedRosters = load_json_or_default(storage.as_ref(), keys::SPEAKER_LISTS);
        info!("Loaded {} saved roster list(s)", saved.len());
        Self { storage, saved }
    }

    /// Roster text from the previous session, empty when there is none or
    /// storage can't be read.
    pub fn restore_current(&self) -> String {
        match self.storage.get(keys::CURRENT_LIST) {
            Ok(text) => text.unwrap_or_default(),
            Err(e) => {
                warn!("{}", e);
                String::new()
            }
        }
    }

    pub fn persist_current(&self, text: &str) -> Result<(), PickerError> {
        self.storage.set(keys::CURRENT_LIST, text)?;
        Ok(())
    }

    /// Insert or overwrite `name`. Empty name or text leaves everything
    /// untouched.
    pub fn save_as(&mut self, name: &str, text: &str) -> Result<(), PickerError> {
        let mut next = self.saved.clone();
        next.save_as(name, text)?;
        self.commit(next)?;
        info!("Saved roster list '{}'", name.trim());
        Ok(())
    }

    pub fn load_by_name(&self, name: &str) -> Result<String, PickerError> {
        Ok(self.saved.load(name)?.to_string())
    }

    pub fn delete(&mut self, name: &str) -> Result<(), PickerError> {
        let mut next = self.saved.clone();
        next.remove(name)?;
        self.commit(next)?;
        info!("Deleted roster list '{}'", name.trim());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.saved.contains(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.saved.names().map(String::from).collect()
    }

    /// Write `next` and adopt it only once the write succeeded.
    fn commit(&mut self, next: SavedRosters) -> Result<(), PickerError> {
        save_json(self.storage.as_ref(), keys::SPEAKER_LISTS, &next)?;
        self.saved = next;
        Ok(())
    }
}
