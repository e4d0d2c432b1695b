//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod roster_source;
pub mod session_logger;
pub mod storage;
pub mod ui_event;
