//! Application layer for podium
//!
//! This crate contains the session controller, the presentation timer task,
//! port definitions and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod timer;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_PRESETS, TimerSettings};
pub use error::PickerError;
pub use ports::{
    roster_source::{RosterSourceError, RosterSourcePort},
    session_logger::{NoSessionLogger, SessionEvent, SessionLogger},
    storage::{InMemoryStorage, StorageError, StoragePort},
    ui_event::{DrawnEvent, GroupsEvent, RosterSnapshot, TimerSnapshot, UiEvent},
};
pub use timer::{PresentationTimer, TickFlow, Ticker, TickerHandle};
pub use use_cases::{
    picker_controller::PickerController, roster_store::RosterStore,
    type_catalog::TypeCatalogStore,
};
