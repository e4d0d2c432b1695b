//! Timer configuration from TOML (`[timer]` section)

use podium_application::{DEFAULT_PRESETS, TimerSettings};
use podium_domain::DEFAULT_DURATION_SECS;
use serde::{Deserialize, Serialize};

/// Raw timer configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimerConfig {
    /// Countdown length before any preset is chosen (seconds)
    pub default_seconds: u32,
    /// Preset durations bound to the number keys, in order (seconds)
    pub presets: Vec<u32>,
}

impl Default for FileTimerConfig {
    fn default() -> Self {
        Self {
            default_seconds: DEFAULT_DURATION_SECS,
            presets: DEFAULT_PRESETS.to_vec(),
        }
    }
}

impl FileTimerConfig {
    /// Convert to application settings. Zero presets are dropped.
    pub fn to_settings(&self) -> TimerSettings {
        let presets = self.presets.iter().copied().filter(|s| *s > 0).collect();
        TimerSettings::default()
            .with_default_seconds(self.default_seconds)
            .with_presets(presets)
    }
}
