//! Periodic scheduled task with an explicit cancellation handle.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// What the tick callback wants next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// Handle to a running [`Ticker`]. Cancels the task when dropped.
pub struct TickerHandle {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl TickerHandle {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the task has exited (cancelled or stopped by its callback).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Spawns periodic tasks on the current tokio runtime.
pub struct Ticker;

impl Ticker {
    /// Call `on_tick` every `period`, first one `period` from now, until
    /// the callback returns [`TickFlow::Stop`] or the handle is cancelled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> TickerHandle
    where
        F: FnMut() -> TickFlow + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if on_tick() == TickFlow::Stop {
                            break;
                        }
                    }
                }
            }
        });

        TickerHandle { token, handle }
    }
}
