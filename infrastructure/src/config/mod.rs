//! Configuration file loading for podium
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PODIUM_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./podium.toml` or `./.podium.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/podium/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileLogConfig, FileOutputConfig, FileStorageConfig, FileTimerConfig,
    default_storage_path,
};
pub use loader::ConfigLoader;

pub(crate) use file_config::expand_home;
