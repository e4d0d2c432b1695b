//! Session log configuration from TOML (`[log]` section)

use super::storage::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// JSONL session log path. Disabled when unset.
    pub session_log: Option<String>,
}

impl FileLogConfig {
    pub fn session_log_path(&self) -> Option<PathBuf> {
        self.session_log.as_deref().map(expand_home)
    }
}
