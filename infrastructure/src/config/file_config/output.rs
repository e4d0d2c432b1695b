//! Output configuration from TOML (`[output]` section)

use podium_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format for one-shot commands (`text` or `json`)
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parsed format; unknown values fall back to the default.
    pub fn parse_format(&self) -> (Option<OutputFormat>, Option<String>) {
        match &self.format {
            None => (None, None),
            Some(raw) => match raw.parse() {
                Ok(format) => (Some(format), None),
                Err(e) => (None, Some(e)),
            },
        }
    }
}
