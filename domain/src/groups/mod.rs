//! Random group building.
//!
//! - [`suggestion::suggest`]: feasible (size, count) pairs for a class size
//! - [`partition::partition`]: uniform random split into equal groups

pub mod partition;
pub mod suggestion;
