//! JSONL file writer for session events.
//!
//! Each [`SessionEvent`] is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use podium_application::{SessionEvent, SessionLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL session logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>` (the timer task logs expiries
/// from its own task). Flushes after every record and on `Drop`.
pub struct JsonlSessionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSessionLogger {
    /// Open (or create) the log at `path`, appending to existing content.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create session log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open session log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionLogger for JsonlSessionLogger {
    fn log(&self, event: SessionEvent) {
        let timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlSessionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlSessionLogger::new(&path).unwrap();

        logger.log(SessionEvent::new(
            "roster_initialized",
            serde_json::json!({ "names": ["Ann", "Ben"] }),
        ));
        logger.log(SessionEvent::new(
            "drawn",
            serde_json::json!({ "name": "Ben", "available": 1, "chosen": 1 }),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.get("timestamp").is_some());
        }
        assert_eq!(records[0]["type"], "roster_initialized");
        assert_eq!(records[0]["names"][1], "Ben");
        assert_eq!(records[1]["type"], "drawn");
        assert_eq!(records[1]["name"], "Ben");
        assert_eq!(records[1]["available"], 1);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlSessionLogger::new(&path).unwrap();

        logger.log(SessionEvent::new("timer_expired", serde_json::Value::Null));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "timer_expired");
        assert!(records[0]["data"].is_null());
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("session.jsonl");

        for _ in 0..2 {
            let logger = JsonlSessionLogger::new(&path).unwrap();
            logger.log(SessionEvent::new("exhausted", serde_json::json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_directory_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlSessionLogger::new(dir.path()).is_none());
    }
}
