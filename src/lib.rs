//! Parking lot occupancy tracker.
//!
//! Three buttons (entry, exit, reset) drive a bounded occupancy count
//! that is shown on an RGB indicator, a 128×64 status display and a
//! buzzer.
//!
//! Everything except the concrete board wiring builds for the host, so
//! the debouncer, signals, store, feedback coordinator and task logic
//! are tested with plain `cargo test`.
//!
//! Note: the embedded binary (main.rs, `--features embedded`) adds the
//! `board` module with the nRF52840 peripherals and spawns the tasks.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod input;
pub mod occupancy;
pub mod tasks;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod board;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use input::{ButtonSource, DebounceScope, EdgeDebouncer, EventSignal};
pub use occupancy::{IndicatorState, Occupancy, OccupancyStore};
pub use tasks::{AppContext, Transition};
pub use ui::{BeepPattern, Feedback, FeedbackCoordinator, TransientMessage};
