//! Infrastructure layer for podium
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod roster;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileLogConfig, FileOutputConfig, FileStorageConfig,
    FileTimerConfig, default_storage_path,
};
pub use logging::JsonlSessionLogger;
pub use roster::LocalRosterSource;
pub use storage::JsonFileStorage;
