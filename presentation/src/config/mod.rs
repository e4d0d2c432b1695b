//! Presentation-level configuration
//!
//! Effective output settings after merging the config file with CLI flags.

use podium_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// A `--output` flag beats the config file.
    pub fn resolve(flag: Option<OutputFormat>, configured: Option<OutputFormat>, color: bool) -> Self {
        Self {
            format: flag.or(configured).unwrap_or_default(),
            color,
        }
    }

    /// Apply the color preference process-wide (`colored` crate).
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
