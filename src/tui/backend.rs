//! Crossterm-backed terminal.
//!
//! Draw calls are collected and written into a ratatui buffer on refresh,
//! which only flushes the cells that changed since the previous frame.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, style::Style};

use crate::error::TpomoError;
use crate::tui::terminal::{check_bounds, Key, Terminal};

struct DrawOp {
    x: u16,
    y: u16,
    text: String,
    style: Style,
}

/// Full-screen terminal in raw mode on the alternate screen.
///
/// The original screen is restored when this value is dropped.
pub struct CrosstermTerminal {
    terminal: ratatui::Terminal<CrosstermBackend<Stdout>>,
    pending: Vec<DrawOp>,
    restored: bool,
}

impl CrosstermTerminal {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout is not a usable terminal.
    pub fn open() -> Result<Self, TpomoError> {
        enable_raw_mode()
            .map_err(|e| TpomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            disable_raw_mode().ok();
            return Err(TpomoError::Terminal(format!("Failed to setup terminal: {e}")));
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match ratatui::Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                disable_raw_mode().ok();
                execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
                return Err(TpomoError::Terminal(format!("Failed to create terminal: {e}")));
            }
        };

        tracing::debug!("terminal opened");
        Ok(Self {
            terminal,
            pending: Vec::new(),
            restored: false,
        })
    }

    /// Leave the alternate screen and raw mode. Safe to call more than once.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show).ok();
        self.terminal.show_cursor().ok();
        self.restored = true;
        tracing::debug!("terminal restored");
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        self.restore();
    }
}

fn to_key(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::Interrupt;
    }
    match key.code {
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

impl Terminal for CrosstermTerminal {
    fn size(&self) -> Result<(u16, u16), TpomoError> {
        Ok(crossterm::terminal::size()?)
    }

    fn clear(&mut self) -> Result<(), TpomoError> {
        self.pending.clear();
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<(), TpomoError> {
        check_bounds(x, y, text, self.size()?)?;
        self.pending.push(DrawOp {
            x,
            y,
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), TpomoError> {
        let ops = &self.pending;
        self.terminal
            .draw(|frame| {
                let area = frame.area();
                let buf = frame.buffer_mut();
                for op in ops {
                    // The surface may have shrunk since the op was queued.
                    if op.y >= area.bottom() || op.x >= area.right() {
                        continue;
                    }
                    buf.set_string(op.x, op.y, &op.text, op.style);
                }
            })
            .map_err(|e| TpomoError::Terminal(format!("Failed to draw: {e}")))?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<Key>, TpomoError> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(to_key(key)));
                }
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> Result<Key, TpomoError> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(to_key(key));
                }
            }
        }
    }
}
