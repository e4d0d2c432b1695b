//! Domain layer for podium
//!
//! This crate contains the core classroom logic. It has no dependencies on
//! storage, scheduling or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Roster and draws
//!
//! A [`Roster`] is the ordered list of names parsed from free text. The
//! [`DrawEngine`] splits it into *available* and *chosen* and draws without
//! replacement until nobody is left.
//!
//! ## Countdown
//!
//! [`Countdown`] is the per-presentation clock. It only changes when told
//! to; something else has to call [`Countdown::tick`] once a second.
//!
//! ## Groups
//!
//! [`suggest`] lists feasible group sizes for a class, [`partition`] builds
//! the groups.

pub mod catalog;
pub mod config;
pub mod core;
pub mod draw;
pub mod groups;
pub mod roster;
pub mod timer;

// Re-export commonly used types
pub use catalog::presentation_type::{PresentationType, PresentationTypeCatalog};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use draw::{
    engine::DrawEngine,
    history::{DrawHistory, HistoryEntry},
};
pub use groups::{
    partition::{MIN_GROUP_SIZE, partition},
    suggestion::{GroupSuggestion, suggest},
};
pub use roster::{
    csv_names::{is_csv_path, parse_csv_names},
    entities::Roster,
    saved::SavedRosters,
};
pub use timer::countdown::{Countdown, DEFAULT_DURATION_SECS, TickOutcome, format_clock};
