//! Countdown - the time budget of a timed game
//!
//! A countdown is a scheduled task in the abstract: it is idle until the first
//! successful removal, runs while the game is live, and is stopped explicitly
//! when the game ends. The real clock lives outside the core; it calls
//! [`Countdown::tick`] once per period while [`Countdown::is_running`] holds.

/// Lifecycle of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountdownState {
    /// Not started yet
    Idle,
    /// Started and consuming ticks
    Running,
    /// Stopped for good (game over); only a fresh countdown runs again
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    state: CountdownState,
}

impl Countdown {
    pub fn new(budget_secs: u32) -> Self {
        Self {
            remaining: budget_secs,
            state: CountdownState::Idle,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Whether the countdown has ever been started
    pub fn started(&self) -> bool {
        self.state != CountdownState::Idle
    }

    /// Start the countdown. Returns true only on the idle -> running transition.
    pub fn start(&mut self) -> bool {
        if self.state != CountdownState::Idle {
            return false;
        }
        self.state = CountdownState::Running;
        true
    }

    /// Stop the countdown. Idempotent; a countdown that never ran stays idle.
    pub fn stop(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Stopped;
        }
    }

    /// Consume one second. Returns the remaining budget, or `None` if not running.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.remaining)
    }

    /// Deduct `secs` from the budget, clamped at zero. Returns seconds actually deducted.
    pub fn deduct(&mut self, secs: u32) -> u32 {
        let before = self.remaining;
        self.remaining = self.remaining.saturating_sub(secs);
        before - self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}
