//! Clock task
//!
//! The one-second clock of a timed game, as an explicit tokio task that can be
//! started and cancelled. Ticks are delivered over an mpsc channel so the game
//! loop handles them between commands, never in the middle of one.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Event delivered by the clock task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockEvent {
    /// Which `start()` produced this tick; ticks from a cancelled run are stale.
    pub generation: u64,
}

pub type ClockReceiver = mpsc::UnboundedReceiver<ClockEvent>;

/// Cancellable periodic task.
pub struct Ticker {
    period: Duration,
    tx: mpsc::UnboundedSender<ClockEvent>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl Ticker {
    pub fn new(period: Duration) -> (Self, ClockReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                period,
                tx,
                handle: None,
                generation: 0,
            },
            rx,
        )
    }

    /// Spawn the clock task. No-op if already running.
    ///
    /// The first tick arrives one full period after this call.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> bool {
        if self.handle.is_some() {
            return false;
        }

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        let period = self.period;
        let first = Instant::now() + period;
        let tx = self.tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(ClockEvent { generation }).is_err() {
                    break;
                }
            }
        }));
        log::debug!("clock started (generation {})", generation);
        true
    }

    /// Cancel the clock task. Calling it when nothing runs is a no-op.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("clock stopped (generation {})", self.generation);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether `event` came from the current run
    pub fn is_current(&self, event: ClockEvent) -> bool {
        self.is_running() && event.generation == self.generation
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
