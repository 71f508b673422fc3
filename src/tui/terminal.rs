//! The terminal capability the countdown draws on and reads keys from.

use ratatui::style::Style;
use ratatui::text::Span;

use crate::error::TpomoError;

/// A key press, reduced to what the countdown cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Ctrl+C. Raw mode swallows SIGINT, so it arrives as a key.
    Interrupt,
    /// Anything else (arrows, function keys, ...).
    Other,
}

/// Screen and keyboard primitives.
///
/// Draw calls are buffered until [`Terminal::refresh`]. A draw that does
/// not fit fails with [`TpomoError::OutOfBounds`] and leaves the buffer
/// untouched.
pub trait Terminal {
    /// Surface size as `(columns, rows)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    fn size(&self) -> Result<(u16, u16), TpomoError>;

    /// Discard everything drawn since the last refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be cleared.
    fn clear(&mut self) -> Result<(), TpomoError>;

    /// Queue `text` at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`TpomoError::OutOfBounds`] if any cell of `text` would fall
    /// outside the surface.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<(), TpomoError>;

    /// Show everything queued since the last clear.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn refresh(&mut self) -> Result<(), TpomoError>;

    /// Return a pending key press without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn read_key(&mut self) -> Result<Option<Key>, TpomoError>;

    /// Block until a key is pressed.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn wait_key(&mut self) -> Result<Key, TpomoError>;
}

/// Display width of `text` in terminal columns.
#[must_use]
pub fn text_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Check that `text` placed at `(x, y)` fits a `width` x `height` surface.
///
/// # Errors
///
/// Returns [`TpomoError::OutOfBounds`] when it does not.
pub fn check_bounds(x: u16, y: u16, text: &str, (width, height): (u16, u16)) -> Result<(), TpomoError> {
    if y >= height || usize::from(x) + text_width(text) > usize::from(width) {
        return Err(TpomoError::OutOfBounds { x, y });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_counts_wide_glyphs() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("🍅🍅"), 4);
        assert_eq!(text_width("█░"), 2);
    }

    #[test]
    fn test_check_bounds() {
        assert!(check_bounds(0, 0, "hello", (5, 1)).is_ok());
        assert!(matches!(
            check_bounds(1, 0, "hello", (5, 1)),
            Err(TpomoError::OutOfBounds { x: 1, y: 0 })
        ));
        assert!(check_bounds(0, 1, "", (5, 1)).is_err());
    }
}
