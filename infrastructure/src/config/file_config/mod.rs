//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

mod log;
mod output;
mod storage;
mod timer;

pub use log::FileLogConfig;
pub use output::FileOutputConfig;
pub use storage::{FileStorageConfig, default_storage_path};
pub use timer::FileTimerConfig;

pub(crate) use storage::expand_home;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Countdown defaults and presets
    pub timer: FileTimerConfig,
    /// Where rosters and presentation types are kept
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Session log settings
    pub log: FileLogConfig,
}

/// A problem found in an otherwise loadable configuration.
///
/// All issues are warnings: the affected value is ignored or replaced by
/// its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted key, e.g. `timer.presets`
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.timer.presets.contains(&0) {
            issues.push(ConfigIssue {
                field: "timer.presets".to_string(),
                message: "zero-length presets are ignored".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let duplicates: Vec<String> = self
            .timer
            .presets
            .iter()
            .filter(|s| !seen.insert(**s))
            .map(|s| s.to_string())
            .collect();
        if !duplicates.is_empty() {
            issues.push(ConfigIssue {
                field: "timer.presets".to_string(),
                message: format!("duplicate preset(s): {}", duplicates.join(", ")),
            });
        }

        if let (None, Some(error)) = self.output.parse_format() {
            issues.push(ConfigIssue {
                field: "output.format".to_string(),
                message: format!("{error}, falling back to 'text'"),
            });
        }

        issues
    }
}
