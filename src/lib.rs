//! tpomo - A terminal pomodoro timer
//!
//! This crate counts down alternating work and break phases in a full-screen
//! terminal UI, with a drift-corrected one-second tick, pause/resume and quit.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

pub use cli::args::Cli;
pub use error::TpomoError;
