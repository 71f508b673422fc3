//! Command-line interface: flags and startup questions.

pub mod args;
pub mod prompt;

pub use args::Cli;
pub use prompt::{resolve_countdown, Prompter};
