//! Roster file sources
//!
//! Provides [`LocalRosterSource`], which reads roster text and CSV exports
//! from the local file system.

mod local_source;

pub use local_source::LocalRosterSource;
