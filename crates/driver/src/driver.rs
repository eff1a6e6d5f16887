//! Driver - sequences commands and clock ticks into a session
//!
//! The driver is the only owner of the [`GameSession`]. Commands and ticks are
//! handled one at a time, each to completion. After every operation the clock
//! task is reconciled with the session: running exactly while the session's
//! countdown runs.

use std::time::Duration;

use log::{debug, info};

use cross_clear_core::{find_playable_move, GameSession, RandomSource, SimpleRng};

use crate::codec::{Command, Response};
use crate::ticker::{ClockEvent, ClockReceiver, Ticker};

pub struct Driver<R: RandomSource = SimpleRng> {
    session: GameSession<R>,
    ticker: Ticker,
}

impl<R: RandomSource> Driver<R> {
    /// Wrap a session. Tick events arrive on the returned receiver and must be
    /// passed back through [`Driver::on_clock`].
    pub fn new(session: GameSession<R>, tick_period: Duration) -> (Self, ClockReceiver) {
        let (ticker, rx) = Ticker::new(tick_period);
        (Self { session, ticker }, rx)
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn clock_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Apply one command. Must be called from within a tokio runtime.
    pub fn handle(&mut self, command: Command) -> Response {
        let response = match command {
            Command::Reset { mode, shape } => {
                // A failed reset keeps the old game, and its clock keeps running.
                match self.session.reset(mode, shape) {
                    Ok(snapshot) => {
                        self.ticker.stop();
                        info!(
                            "new {} game on {} board",
                            mode.as_str(),
                            shape.as_str()
                        );
                        Response::Snapshot(snapshot)
                    }
                    Err(err) => Response::from(err),
                }
            }
            Command::Restart => match self.session.restart() {
                Ok(snapshot) => {
                    self.ticker.stop();
                    Response::Snapshot(snapshot)
                }
                Err(err) => Response::from(err),
            },
            Command::Tap { x, y } => match self.session.tap(x, y) {
                Ok(result) => Response::Tap(result),
                Err(err) => {
                    debug!("rejected tap: {}", err);
                    Response::from(err)
                }
            },
            Command::Snapshot => Response::Snapshot(self.session.snapshot()),
            Command::Hint => {
                let cell = if self.session.is_active() {
                    find_playable_move(self.session.board()).map(|(x, y)| [x, y])
                } else {
                    None
                };
                Response::Hint { cell }
            }
            Command::Quit => {
                self.ticker.stop();
                return Response::Bye;
            }
        };

        self.sync_clock();
        response
    }

    /// Deliver a clock event. Stale events (from a cancelled run) yield `None`.
    pub fn on_clock(&mut self, event: ClockEvent) -> Option<Response> {
        if !self.ticker.is_current(event) {
            return None;
        }
        let result = self.session.tick();
        self.sync_clock();
        Some(Response::Tick(result))
    }

    /// Stop the clock for good
    pub fn shutdown(&mut self) {
        self.ticker.stop();
    }

    fn sync_clock(&mut self) {
        if self.session.timer_running() {
            self.ticker.start();
        } else {
            self.ticker.stop();
        }
    }
}
