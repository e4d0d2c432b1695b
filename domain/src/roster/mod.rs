//! Roster domain.
//!
//! - [`entities::Roster`]: ordered list of candidate names parsed from free text
//! - [`saved::SavedRosters`]: named roster texts kept for later sessions
//! - [`csv_names`]: extraction of names from CSV content

pub mod csv_names;
pub mod entities;
pub mod saved;
