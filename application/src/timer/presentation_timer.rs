//! Presentation timer: a [`Countdown`] driven by a [`Ticker`].

use super::ticker::{TickFlow, Ticker, TickerHandle};
use crate::config::TimerSettings;
use crate::ports::session_logger::{NoSessionLogger, SessionEvent, SessionLogger};
use crate::ports::ui_event::{TimerSnapshot, UiEvent};
use podium_domain::{Countdown, TickOutcome};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Countdown shared with the tick task.
///
/// `generation` changes whenever the ticker is replaced or cancelled, so a
/// tick from a superseded task that is already in flight is ignored.
struct TimerCore {
    countdown: Countdown,
    generation: u64,
}

/// Single presentation countdown with start/pause/reset and presets.
///
/// Starting the timer spawns a tokio task, so [`toggle`](Self::toggle) and
/// [`start`](Self::start) must run inside a tokio runtime.
pub struct PresentationTimer {
    core: Arc<Mutex<TimerCore>>,
    ticker: Option<TickerHandle>,
    tick_period: Duration,
    tx: mpsc::UnboundedSender<UiEvent>,
    session_logger: Arc<dyn SessionLogger>,
}

impl PresentationTimer {
    pub fn new(settings: &TimerSettings, tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            core: Arc::new(Mutex::new(TimerCore {
                countdown: Countdown::new(settings.default_seconds),
                generation: 0,
            })),
            ticker: None,
            tick_period: settings.tick_period,
            tx,
            session_logger: Arc::new(NoSessionLogger),
        }
    }

    pub fn with_session_logger(mut self, logger: Arc<dyn SessionLogger>) -> Self {
        self.session_logger = logger;
        self
    }

    /// Cancel any countdown, load `seconds` as the new default and pause.
    pub fn set_preset(&mut self, seconds: u32) {
        self.cancel_ticker();
        let snapshot = {
            let mut core = self.lock();
            core.countdown.set_preset(seconds);
            TimerSnapshot::from(&core.countdown)
        };
        info!("Timer preset set to {}", snapshot.display());
        self.emit(UiEvent::TimerChanged(snapshot));
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.cancel_ticker();
        let (snapshot, generation) = {
            let mut core = self.lock();
            core.countdown.start();
            (TimerSnapshot::from(&core.countdown), core.generation)
        };
        self.ticker = Some(self.spawn_ticker(generation));
        debug!("Timer started at {}", snapshot.display());
        self.emit(UiEvent::TimerChanged(snapshot));
    }

    pub fn pause(&mut self) {
        self.cancel_ticker();
        let snapshot = {
            let mut core = self.lock();
            core.countdown.pause();
            TimerSnapshot::from(&core.countdown)
        };
        debug!("Timer paused at {}", snapshot.display());
        self.emit(UiEvent::TimerChanged(snapshot));
    }

    /// Stop and restore the default duration.
    pub fn reset(&mut self) {
        self.cancel_ticker();
        let snapshot = {
            let mut core = self.lock();
            core.countdown.reset();
            TimerSnapshot::from(&core.countdown)
        };
        debug!("Timer reset to {}", snapshot.display());
        self.emit(UiEvent::TimerChanged(snapshot));
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from(&self.lock().countdown)
    }

    pub fn is_running(&self) -> bool {
        self.lock().countdown.is_running()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.lock().countdown.remaining_seconds()
    }

    /// `MM:SS`
    pub fn display(&self) -> String {
        self.lock().countdown.display()
    }

    fn spawn_ticker(&self, generation: u64) -> TickerHandle {
        let core = self.core.clone();
        let tx = self.tx.clone();
        let logger = self.session_logger.clone();

        Ticker::spawn(self.tick_period, move || {
            let mut core = core.lock().unwrap_or_else(PoisonError::into_inner);
            if core.generation != generation {
                return TickFlow::Stop;
            }
            match core.countdown.tick() {
                TickOutcome::Counting(_) => {
                    let _ = tx.send(UiEvent::TimerTick(TimerSnapshot::from(&core.countdown)));
                    TickFlow::Continue
                }
                TickOutcome::Expired => {
                    let default = core.countdown.default_seconds();
                    let _ = tx.send(UiEvent::TimerTick(TimerSnapshot::from(&core.countdown)));
                    let _ = tx.send(UiEvent::TimerExpired);
                    info!("Time is up");
                    logger.log(SessionEvent::new(
                        "timer_expired",
                        serde_json::json!({ "duration_seconds": default }),
                    ));
                    TickFlow::Stop
                }
                TickOutcome::Idle => TickFlow::Stop,
            }
        })
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.lock().generation += 1;
    }

    fn lock(&self) -> MutexGuard<'_, TimerCore> {
        self.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}

impl Drop for PresentationTimer {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> (PresentationTimer, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (PresentationTimer::new(&TimerSettings::default(), tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_seconds_then_reset() {
        let (mut timer, _rx) = timer();
        timer.set_preset(300);
        timer.toggle();
        assert!(timer.is_running());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(timer.remaining_seconds(), 297);
        assert_eq!(timer.display(), "04:57");

        timer.reset();
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.is_running());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_keeps_remaining() {
        let (mut timer, _rx) = timer();
        timer.set_preset(60);
        timer.toggle();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        timer.toggle();
        assert!(!timer.is_running());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(timer.remaining_seconds(), 58);

        timer.toggle();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(timer.remaining_seconds(), 57);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_emits_event_and_pauses() {
        let (mut timer, mut rx) = timer();
        timer.set_preset(2);
        timer.start();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.is_running());

        let events = drain(&mut rx);
        let expired = events
            .iter()
            .filter(|e| matches!(e, UiEvent::TimerExpired))
            .count();
        assert_eq!(expired, 1);
        assert!(matches!(events.last(), Some(UiEvent::TimerExpired)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_preset_cancels_running_countdown() {
        let (mut timer, _rx) = timer();
        timer.start();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(timer.remaining_seconds(), 299);

        timer.set_preset(120);
        tokio::time::sleep(Duration::from_secs(3)).await;
        let snapshot = timer.snapshot();
        assert_eq!(snapshot.remaining_seconds, 120);
        assert!(!snapshot.running);
        assert_eq!(snapshot.active_preset, Some(120));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_then_start_does_not_double_tick() {
        let (mut timer, _rx) = timer();
        timer.set_preset(100);
        timer.start();
        tokio::time::sleep(Duration::from_millis(1500)).await;

        timer.reset();
        timer.toggle();
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(timer.remaining_seconds(), 98);
    }
}
