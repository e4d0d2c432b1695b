//! Countdown state machine

use serde::{Deserialize, Serialize};

/// Default presentation length (5 minutes)
pub const DEFAULT_DURATION_SECS: u32 = 300;

/// Result of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running with this many seconds left
    Counting(u32),
    /// Reached zero on this tick; the countdown is now paused
    Expired,
    /// Not running, nothing changed
    Idle,
}

/// Single countdown clock.
///
/// `remaining_seconds` equals `default_seconds` right after
/// [`set_preset`](Self::set_preset) or [`reset`](Self::reset) and only
/// decreases while running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    default_seconds: u32,
    remaining_seconds: u32,
    running: bool,
    active_preset: Option<u32>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl Countdown {
    pub fn new(default_seconds: u32) -> Self {
        Self {
            default_seconds,
            remaining_seconds: default_seconds,
            running: false,
            active_preset: None,
        }
    }

    /// Set both the default and the remaining time, and pause.
    pub fn set_preset(&mut self, seconds: u32) {
        self.default_seconds = seconds;
        self.remaining_seconds = seconds;
        self.running = false;
        self.active_preset = Some(seconds);
    }

    /// Restore the default duration and pause.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.default_seconds;
        self.running = false;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Flip between running and paused. Returns the new running state.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Advance by one second.
    ///
    /// Starting at zero is allowed: the first tick then expires
    /// immediately.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            TickOutcome::Expired
        } else {
            TickOutcome::Counting(self.remaining_seconds)
        }
    }

    pub fn default_seconds(&self) -> u32 {
        self.default_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The preset last applied through [`set_preset`](Self::set_preset)
    pub fn active_preset(&self) -> Option<u32> {
        self.active_preset
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

/// Format seconds as zero-padded `MM:SS`; minutes grow past two digits
/// instead of wrapping into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
