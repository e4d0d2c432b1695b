//! UI event types emitted by the controller and the timer task
//!
//! These events form the output port from the application layer to the
//! presentation layer. The TUI presenter folds them into its render state.

use chrono::{DateTime, Local};
use podium_domain::{Countdown, GroupSuggestion, PresentationType, format_clock};

/// Events for the presentation layer to render
#[derive(Debug, Clone)]
pub enum UiEvent {
    // === Roster & Draws ===
    /// Roster (re)initialized: everyone available again, history cleared
    RosterInitialized(RosterSnapshot),
    /// A name was drawn
    Drawn(DrawnEvent),
    /// A draw was attempted with nobody left
    Exhausted,

    // === Timer ===
    /// Preset, reset, start or pause
    TimerChanged(TimerSnapshot),
    /// One second elapsed while running
    TimerTick(TimerSnapshot),
    /// Countdown reached zero
    TimerExpired,

    // === Groups ===
    GroupSuggestions {
        total: usize,
        suggestions: Vec<GroupSuggestion>,
    },
    GroupsCreated(GroupsEvent),

    // === Saved lists & presentation types ===
    ListsChanged {
        names: Vec<String>,
        selected: Option<String>,
    },
    TypesChanged {
        names: Vec<String>,
    },
    TypeSelected(PresentationType),

    // === Messages ===
    /// Informational message for the status line
    Notice { message: String },
}

/// Roster state right after initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot {
    pub names: Vec<String>,
    pub available: usize,
    pub chosen: usize,
    pub selected_list: Option<String>,
}

/// A completed draw
#[derive(Debug, Clone)]
pub struct DrawnEvent {
    pub name: String,
    pub drawn_at: DateTime<Local>,
    pub available: usize,
    pub chosen: usize,
    /// Whether another draw can still succeed
    pub can_draw: bool,
}

/// Timer state for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub remaining_seconds: u32,
    pub default_seconds: u32,
    pub running: bool,
    pub active_preset: Option<u32>,
}

impl TimerSnapshot {
    /// `MM:SS`
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

impl From<&Countdown> for TimerSnapshot {
    fn from(countdown: &Countdown) -> Self {
        Self {
            remaining_seconds: countdown.remaining_seconds(),
            default_seconds: countdown.default_seconds(),
            running: countdown.is_running(),
            active_preset: countdown.active_preset(),
        }
    }
}

/// Groups built from the current roster
#[derive(Debug, Clone)]
pub struct GroupsEvent {
    pub groups: Vec<Vec<String>>,
    /// Names left out because they did not fill a whole group
    pub excluded: usize,
}
