//! Draws countdown frames onto a [`Terminal`].

use ratatui::style::{Color, Modifier, Style};

use crate::error::TpomoError;
use crate::features::countdown::{format_hms, PhaseState, ProgressModel};
use crate::tui::glyphs;
use crate::tui::terminal::{text_width, Key, Terminal};

/// Turns a short string into rows of large glyphs.
pub type GlyphFn = fn(&str) -> Vec<String>;

const PROGRESS_ROW: u16 = 1;
const CLOCK_ROW: u16 = 2;

/// Frame layout and drawing on top of a terminal.
///
/// Draws that fall outside the surface are skipped, so a small or resized
/// terminal never interrupts the countdown.
pub struct Renderer<T: Terminal> {
    terminal: T,
    glyphs: GlyphFn,
    style: Style,
}

impl<T: Terminal> Renderer<T> {
    /// Create a renderer using the built-in block font.
    pub fn new(terminal: T) -> Self {
        Self::with_glyphs(terminal, glyphs::render)
    }

    /// Create a renderer with a custom glyph function.
    pub fn with_glyphs(terminal: T, glyphs: GlyphFn) -> Self {
        Self {
            terminal,
            glyphs,
            style: Style::default(),
        }
    }

    /// The underlying terminal.
    pub const fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Consume the renderer, returning the terminal.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// The style applied to draws right now.
    pub const fn current_style(&self) -> Style {
        self.style
    }

    /// Run `draw` with `style` applied, restoring the previous style on
    /// every exit path of `draw`.
    pub fn with_style<R>(&mut self, style: Style, draw: impl FnOnce(&mut Self) -> R) -> R {
        let previous = std::mem::replace(&mut self.style, style);
        let out = draw(self);
        self.style = previous;
        out
    }

    /// Width in columns of the rendered `00:00:00` clock.
    pub fn clock_width(&self) -> usize {
        glyphs::block_width(&(self.glyphs)("00:00:00"))
    }

    fn put(&mut self, x: u16, y: u16, text: &str) -> Result<(), TpomoError> {
        match self.terminal.draw_text(x, y, text, self.style) {
            Err(TpomoError::OutOfBounds { x, y }) => {
                tracing::trace!(x, y, "skipped draw outside terminal");
                Ok(())
            }
            other => other,
        }
    }

    fn put_block(&mut self, x: u16, y: u16, rows: &[String]) -> Result<(), TpomoError> {
        for (offset, row) in (0_u16..).zip(rows) {
            self.put(x, y.saturating_add(offset), row)?;
        }
        Ok(())
    }

    fn centered_x(&self, content_width: usize) -> Result<u16, TpomoError> {
        let (width, _) = self.terminal.size()?;
        let content = u16::try_from(content_width).unwrap_or(u16::MAX);
        Ok(width.saturating_sub(content) / 2)
    }

    /// Clear the screen and draw one countdown frame.
    ///
    /// Does not refresh; the status line is added before the frame is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails for a reason other than the
    /// draw being out of bounds.
    pub fn draw_frame(
        &mut self,
        phase: &PhaseState,
        progress: &ProgressModel,
        quote: Option<&str>,
    ) -> Result<(), TpomoError> {
        self.terminal.clear()?;

        let clock = (self.glyphs)(&format_hms(phase.remaining_seconds));
        let clock_x = self.centered_x(self.clock_width())?;
        let clock_height = u16::try_from(clock.len()).unwrap_or(u16::MAX);
        let progress_line =
            progress.render(phase.kind, phase.remaining_seconds, phase.total_seconds);

        self.put(clock_x.saturating_sub(2), PROGRESS_ROW, &progress_line)?;
        self.with_style(Style::default().fg(Color::Cyan), |r| {
            r.put_block(clock_x, CLOCK_ROW, &clock)
        })?;

        let lower_progress_row = CLOCK_ROW.saturating_add(clock_height).saturating_add(1);
        self.put(clock_x.saturating_sub(2), lower_progress_row, &progress_line)?;

        let label = (self.glyphs)(&phase.label());
        let label_row = lower_progress_row.saturating_add(2);
        let label_x = self.centered_x(glyphs::block_width(&label))?;
        self.with_style(Style::default().add_modifier(Modifier::BOLD), |r| {
            r.put_block(label_x, label_row, &label)
        })?;

        if let Some(quote) = quote {
            let label_height = u16::try_from(label.len()).unwrap_or(u16::MAX);
            let quote_row = label_row.saturating_add(label_height).saturating_add(1);
            let quote_x = self.centered_x(text_width(quote))?;
            self.with_style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
                |r| r.put(quote_x, quote_row, quote),
            )?;
        }

        Ok(())
    }

    /// Replace the bottom status line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn draw_status(&mut self, text: &str) -> Result<(), TpomoError> {
        let (width, height) = self.terminal.size()?;
        let row = height.saturating_sub(1);
        let blank = " ".repeat(usize::from(width.saturating_sub(1)));
        self.put(0, row, &blank)?;
        let x = self.centered_x(text_width(text))?;
        self.with_style(Style::default().fg(Color::DarkGray), |r| r.put(x, row, text))
    }

    /// Clear the screen and draw a centered two-line message.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn draw_banner(&mut self, title: &str, hint: &str) -> Result<(), TpomoError> {
        self.terminal.clear()?;
        let (_, height) = self.terminal.size()?;
        let row = height / 2;

        let title_x = self.centered_x(text_width(title))?;
        self.with_style(
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            |r| r.put(title_x, row.saturating_sub(1), title),
        )?;
        let hint_x = self.centered_x(text_width(hint))?;
        self.with_style(Style::default().fg(Color::DarkGray), |r| {
            r.put(hint_x, row.saturating_add(1), hint)
        })
    }

    /// Show everything drawn so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    pub fn refresh(&mut self) -> Result<(), TpomoError> {
        self.terminal.refresh()
    }

    /// Non-blocking key read.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    pub fn read_key(&mut self) -> Result<Option<Key>, TpomoError> {
        self.terminal.read_key()
    }

    /// Block for the next key press.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    pub fn wait_key(&mut self) -> Result<Key, TpomoError> {
        self.terminal.wait_key()
    }
}
