//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Path of the JSON storage file. `~` is expanded.
    pub path: Option<String>,
}

impl FileStorageConfig {
    /// Configured path, or `$XDG_DATA_HOME/podium/storage.json`.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(path) => Some(expand_home(path)),
            None => default_storage_path(),
        }
    }
}

/// `$XDG_DATA_HOME/podium/storage.json` (or the platform equivalent)
pub fn default_storage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("podium").join("storage.json"))
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = FileStorageConfig {
            path: Some("/tmp/class.json".to_string()),
        };
        assert_eq!(
            config.resolve_path(),
            Some(PathBuf::from("/tmp/class.json"))
        );
    }

    #[test]
    fn test_default_path_is_under_podium() {
        if let Some(path) = FileStorageConfig::default().resolve_path() {
            assert!(path.ends_with("podium/storage.json"));
        }
    }

    #[test]
    fn test_expand_home_leaves_relative_paths() {
        assert_eq!(expand_home("data/s.json"), PathBuf::from("data/s.json"));
    }
}
