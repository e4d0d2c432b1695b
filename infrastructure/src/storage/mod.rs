//! Storage adapters
//!
//! Provides [`JsonFileStorage`], a single-file implementation of the
//! [`StoragePort`](podium_application::StoragePort).

mod json_file;

pub use json_file::JsonFileStorage;
