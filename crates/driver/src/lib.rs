//! Driver crate - runs a game session against a real clock
//!
//! The core is pure and knows nothing about time; this crate supplies the
//! missing pieces for an interactive front-end:
//!
//! - [`ticker`]: the one-second clock as a cancellable tokio task
//! - [`driver`]: owns the session, applies commands and ticks, keeps the clock
//!   in step with the countdown
//! - [`codec`]: line-delimited JSON commands and responses
//! - [`config`]: settings from environment variables
//!
//! # Environment Variables
//!
//! - `CROSS_CLEAR_SEED`: RNG seed (default: wall-clock derived)
//! - `CROSS_CLEAR_START_TIME`: timed-mode budget in seconds (default: 120)
//! - `CROSS_CLEAR_PENALTY`: miss penalty in seconds (default: 10)
//! - `CROSS_CLEAR_PALETTE`: colors in play, 1-5 (default: 5)
//! - `CROSS_CLEAR_TICK_MS`: clock period (default: 1000)
//! - `CROSS_CLEAR_MODE` / `CROSS_CLEAR_SHAPE`: first game settings
//!
//! # Example Session
//!
//! ```text
//! -> {"type":"reset","mode":"timed","shape":"landscape"}
//! <- {"type":"snapshot","episode_id":1,...,"time_left":120,...}
//! -> {"type":"hint"}
//! <- {"type":"hint","cell":[12,7]}
//! -> {"type":"tap","x":12,"y":7}
//! <- {"type":"tap","outcome":"hit","removed_count":2,...,"timer_started":true,...}
//! <- {"type":"tick","applied":true,"time_left_after":119,"ended":false,"end_reason":null}
//! ```

pub mod codec;
pub mod config;
pub mod driver;
pub mod ticker;

pub use cross_clear_core as core;
pub use cross_clear_types as types;

pub use codec::{encode_response, parse_command, CodecError, Command, ErrorCode, Response};
pub use config::DriverConfig;
pub use driver::Driver;
pub use ticker::{ClockEvent, ClockReceiver, Ticker};
