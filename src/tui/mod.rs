//! Terminal User Interface (TUI) for tpomo.
//!
//! Full-screen countdown drawn with ratatui on a crossterm backend.

mod backend;
pub mod glyphs;
mod renderer;
pub mod terminal;

pub use backend::CrosstermTerminal;
pub use renderer::{GlyphFn, Renderer};
pub use terminal::{Key, Terminal};

use crate::error::TpomoError;
use crate::features::countdown::{
    CountdownConfig, SessionController, SessionOptions, SessionReport, SystemClock,
};
use crate::features::quotes::QuoteSource;

/// Run a countdown session in the terminal.
///
/// The terminal is restored before this returns, whether or not the session
/// succeeded.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(
    config: &CountdownConfig,
    options: SessionOptions,
    quotes: Box<dyn QuoteSource>,
) -> Result<SessionReport, TpomoError> {
    let terminal = CrosstermTerminal::open()?;
    let mut session = SessionController::new(Renderer::new(terminal), SystemClock, quotes, options);

    let result = session.run_session(config);

    // Restore terminal
    session.into_renderer().into_terminal().restore();

    result
}
