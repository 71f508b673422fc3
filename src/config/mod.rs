//! Configuration management for tpomo.
//!
//! This module handles loading configuration from `~/.tpomo/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, DisplayConfig, TimerConfig};
