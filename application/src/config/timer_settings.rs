//! Timer settings: presets and the starting duration.

use podium_domain::DEFAULT_DURATION_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Preset buttons offered by default (seconds)
pub const DEFAULT_PRESETS: [u32; 6] = [60, 120, 180, 300, 420, 600];

/// Countdown configuration used by [`PresentationTimer`](crate::timer::PresentationTimer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    /// Duration loaded at startup before any preset is chosen.
    pub default_seconds: u32,
    /// Fixed durations bound to the preset controls, in display order.
    pub presets: Vec<u32>,
    /// Tick cadence. One second outside of tests.
    #[serde(skip, default = "default_tick_period")]
    pub tick_period: Duration,
}

fn default_tick_period() -> Duration {
    Duration::from_secs(1)
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            default_seconds: DEFAULT_DURATION_SECS,
            presets: DEFAULT_PRESETS.to_vec(),
            tick_period: default_tick_period(),
        }
    }
}

impl TimerSettings {
    // ==================== Builder Methods ====================

    pub fn with_default_seconds(mut self, seconds: u32) -> Self {
        self.default_seconds = seconds;
        self
    }

    pub fn with_presets(mut self, presets: Vec<u32>) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Preset bound to the n-th control (1-based, as shown on screen).
    pub fn preset(&self, position: usize) -> Option<u32> {
        position
            .checked_sub(1)
            .and_then(|index| self.presets.get(index))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TimerSettings::default();
        assert_eq!(settings.default_seconds, 300);
        assert_eq!(settings.presets, vec![60, 120, 180, 300, 420, 600]);
        assert_eq!(settings.tick_period, Duration::from_secs(1));
    }

    #[test]
    fn test_preset_lookup_is_one_based() {
        let settings = TimerSettings::default().with_presets(vec![30, 90]);
        assert_eq!(settings.preset(0), None);
        assert_eq!(settings.preset(1), Some(30));
        assert_eq!(settings.preset(2), Some(90));
        assert_eq!(settings.preset(3), None);
    }
}
