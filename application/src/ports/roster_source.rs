//! Port for reading roster files (plain text or CSV exports).

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterSourceError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Could not read {path}: {message}")]
    Read { path: String, message: String },
}

/// Reads the raw content of a roster file.
#[async_trait]
pub trait RosterSourcePort: Send + Sync {
    async fn read_text(&self, path: &Path) -> Result<String, RosterSourceError>;
}
