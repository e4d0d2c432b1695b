//! Presentation countdown domain.
//!
//! The countdown itself is a plain state machine driven by [`Countdown::tick`];
//! scheduling the ticks is the application layer's job.

pub mod countdown;
