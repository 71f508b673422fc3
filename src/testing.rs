//! Test doubles for the clock and terminal.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::style::Style;

use crate::error::TpomoError;
use crate::features::countdown::Clock;
use crate::tui::terminal::check_bounds;
use crate::tui::{Key, Terminal};

/// Glyph function that leaves text as a single plain row.
pub fn plain_glyphs(text: &str) -> Vec<String> {
    vec![text.to_string()]
}

/// Virtual monotonic clock. Sleeping advances it instantly.
///
/// Clones share the same time.
#[derive(Debug, Clone)]
pub struct FakeClock {
    now: Rc<Cell<Instant>>,
    slept: Rc<Cell<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
            slept: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Let time pass without sleeping, e.g. to model processing cost.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn total_slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.now.get()
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration);
        self.slept.set(self.slept.get() + duration);
    }
}

struct Op {
    y: u16,
    text: String,
    style: Style,
}

/// In-memory terminal with scripted keys.
///
/// Each `read_key` consumes one scripted entry (`None` once the script runs
/// out). Every refresh records the non-blank texts drawn since the last
/// clear as a frame.
pub struct FakeTerminal {
    width: u16,
    height: u16,
    keys: VecDeque<Option<Key>>,
    waits: usize,
    pending: Vec<Op>,
    frames: Vec<Vec<String>>,
    clock: Option<FakeClock>,
    frame_costs: Vec<Duration>,
    clears: usize,
}

impl FakeTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            keys: VecDeque::new(),
            waits: 0,
            pending: Vec::new(),
            frames: Vec::new(),
            clock: None,
            frame_costs: Vec::new(),
            clears: 0,
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Advance `clock` by the next cost (cycling) on every clear.
    pub fn with_frame_costs(
        mut self,
        clock: &FakeClock,
        costs: impl IntoIterator<Item = Duration>,
    ) -> Self {
        self.clock = Some(clock.clone());
        self.frame_costs = costs.into_iter().collect();
        self
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Vec<String> {
        self.frames.last().cloned().unwrap_or_default()
    }

    pub const fn waits(&self) -> usize {
        self.waits
    }

    pub fn unread_keys(&self) -> usize {
        self.keys.len()
    }

    /// Style of a queued draw with exactly this text.
    pub fn style_of(&self, text: &str) -> Option<Style> {
        self.pending.iter().find(|op| op.text == text).map(|op| op.style)
    }

    /// Row of a queued draw with exactly this text.
    pub fn row_of(&self, text: &str) -> Option<u16> {
        self.pending.iter().find(|op| op.text == text).map(|op| op.y)
    }

    /// Clock readings in the order they were shown, repeats collapsed.
    pub fn clocks_shown(&self) -> Vec<String> {
        let mut shown: Vec<String> = Vec::new();
        for text in self.frames.iter().flatten() {
            if is_clock(text) && shown.last() != Some(text) {
                shown.push(text.clone());
            }
        }
        shown
    }
}

fn is_clock(text: &str) -> bool {
    text.len() == 8
        && text.chars().enumerate().all(|(i, c)| {
            if i == 2 || i == 5 {
                c == ':'
            } else {
                c.is_ascii_digit()
            }
        })
}

impl Terminal for FakeTerminal {
    fn size(&self) -> Result<(u16, u16), TpomoError> {
        Ok((self.width, self.height))
    }

    fn clear(&mut self) -> Result<(), TpomoError> {
        self.pending.clear();
        if let Some(clock) = &self.clock {
            if !self.frame_costs.is_empty() {
                clock.advance(self.frame_costs[self.clears % self.frame_costs.len()]);
            }
        }
        self.clears += 1;
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<(), TpomoError> {
        check_bounds(x, y, text, (self.width, self.height))?;
        self.pending.push(Op {
            y,
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn refresh(&mut self) -> Result<(), TpomoError> {
        let frame = self
            .pending
            .iter()
            .filter(|op| !op.text.trim().is_empty())
            .map(|op| op.text.clone())
            .collect();
        self.frames.push(frame);
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<Key>, TpomoError> {
        Ok(self.keys.pop_front().flatten())
    }

    fn wait_key(&mut self) -> Result<Key, TpomoError> {
        self.waits += 1;
        Ok(Key::Char(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_clock_shared_between_clones() {
        let clock = FakeClock::new();
        let other = clock.clone();
        let start = clock.now();
        other.sleep(Duration::from_secs(2));
        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.now() - start, Duration::from_millis(2500));
        assert_eq!(clock.total_slept(), Duration::from_secs(2));
    }

    #[test]
    fn test_is_clock() {
        assert!(is_clock("01:02:03"));
        assert!(!is_clock("WORK [1/1]"));
        assert!(!is_clock("1:02:03"));
    }
}
