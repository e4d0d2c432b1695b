//! Logging infrastructure: structured session logging.
//!
//! Provides [`JsonlSessionLogger`], a JSONL file writer that implements
//! the [`SessionLogger`](podium_application::SessionLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlSessionLogger;
