//! Port for structured session logging.
//!
//! Defines the [`SessionLogger`] trait for recording what happened in a
//! class session (roster loaded, who was drawn and when, timer expiries,
//! groups built) to a machine-readable log.
//!
//! This is separate from `tracing`-based diagnostics: tracing handles
//! human-readable operational messages, while this port keeps a record the
//! instructor can keep or grade from (JSONL).

use serde_json::Value;

/// A structured session event for logging.
pub struct SessionEvent {
    /// Event type identifier (e.g., "drawn", "timer_expired").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging session events.
///
/// `log` is synchronous and infallible: a broken log must never interrupt
/// a class. Adapters swallow their own write failures.
pub trait SessionLogger: Send + Sync {
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSessionLogger;

impl SessionLogger for NoSessionLogger {
    fn log(&self, _event: SessionEvent) {}
}
