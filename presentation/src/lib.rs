//! Presentation layer for podium
//!
//! This crate contains CLI definitions, console output formatters,
//! and the interactive terminal UI.

pub mod cli;
pub mod config;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use tui::TuiApp;
