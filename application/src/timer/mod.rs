//! Presentation timer scheduling.
//!
//! - [`ticker::Ticker`]: a periodic task with a cancellation handle
//! - [`presentation_timer::PresentationTimer`]: drives a
//!   [`Countdown`](podium_domain::Countdown) with a ticker and reports to the UI

pub mod presentation_timer;
pub mod ticker;

pub use presentation_timer::PresentationTimer;
pub use ticker::{TickFlow, Ticker, TickerHandle};
