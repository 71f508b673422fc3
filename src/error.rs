//! Error types for tpomo.

use thiserror::Error;

/// Errors produced while configuring or running a countdown session.
#[derive(Debug, Error)]
pub enum TpomoError {
    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// A startup answer or flag could not be used.
    #[error("invalid {field}: '{value}' (expected a positive whole number)")]
    InvalidInput {
        /// Which setting was being read.
        field: &'static str,
        /// What the user supplied.
        value: String,
    },

    /// The terminal could not be set up or driven.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// A draw call would land outside the visible surface.
    #[error("draw at ({x}, {y}) is outside the terminal")]
    OutOfBounds {
        /// Column of the rejected draw.
        x: u16,
        /// Row of the rejected draw.
        y: u16,
    },

    /// Filesystem or stream failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TpomoError {
    /// Whether this error was caused by user-supplied configuration.
    ///
    /// Configuration errors are reported before any rendering starts and do
    /// not produce a crash report.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidInput { .. })
    }
}
