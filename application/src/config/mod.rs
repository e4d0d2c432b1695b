//! Application-level configuration.
//!
//! - [`TimerSettings`]: countdown presets and starting duration

pub mod timer_settings;

pub use timer_settings::{DEFAULT_PRESETS, TimerSettings};
