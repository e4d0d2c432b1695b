//! Local file system roster source

use crate::config::expand_home;
use async_trait::async_trait;
use podium_application::{RosterSourceError, RosterSourcePort};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads roster files from disk with `tokio::fs`.
///
/// Content must be UTF-8. A leading `~/` is expanded to the home
/// directory; relative paths resolve against the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalRosterSource;

impl LocalRosterSource {
    pub fn new() -> Self {
        Self
    }

    fn resolve(path: &Path) -> PathBuf {
        path.to_str()
            .map(expand_home)
            .unwrap_or_else(|| path.to_path_buf())
    }
}

#[async_trait]
impl RosterSourcePort for LocalRosterSource {
    async fn read_text(&self, path: &Path) -> Result<String, RosterSourceError> {
        let path = Self::resolve(path);
        debug!("Reading roster file {}", path.display());
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                RosterSourceError::NotFound(path.display().to_string())
            } else {
                RosterSourceError::Read {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}
