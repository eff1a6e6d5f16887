//! Cross Clear (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so integration tests and
//! front-ends can use `cross_clear::{core, driver, types}`.

pub use cross_clear_core as core;
pub use cross_clear_driver as driver;
pub use cross_clear_types as types;
