//! Pause, resume and quit handling during a countdown.
//!
//! The controller is polled once per tick. A pause key keeps it in an inner
//! loop that sleeps in short intervals and pushes the tick baseline back by
//! the time that passed, so paused time is never counted as active time.

use std::time::Duration;

use super::clock::{Clock, ClockBaseline};
use crate::error::TpomoError;
use crate::tui::{Key, Renderer, Terminal};

/// Status line shown while the countdown is running.
pub const RUNNING_HINT: &str = "p:pause | q:quit";
/// Status line shown while the countdown is paused.
pub const PAUSED_HINT: &str = "PAUSED | p:resume | q:quit";

/// Default interval between key checks while paused.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Counting down.
    Running,
    /// Waiting for the resume key.
    Paused,
    /// Quit requested. Terminal for the whole session.
    Quit,
}

/// Flag view of the controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseState {
    pub is_paused: bool,
    pub quit_requested: bool,
}

/// What a key means to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePause,
    Quit,
    Ignore,
}

impl From<Key> for KeyCommand {
    fn from(key: Key) -> Self {
        match key {
            Key::Char('q' | 'Q') | Key::Interrupt => Self::Quit,
            Key::Char('p' | 'P') => Self::TogglePause,
            Key::Char(_) | Key::Other => Self::Ignore,
        }
    }
}

/// State machine for pause/resume/quit.
#[derive(Debug, Clone)]
pub struct PauseController {
    state: ControlState,
    poll_interval: Duration,
}

impl PauseController {
    /// Create a running controller that checks keys every `poll_interval`
    /// while paused.
    #[must_use]
    pub const fn new(poll_interval: Duration) -> Self {
        Self {
            state: ControlState::Running,
            poll_interval,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ControlState {
        self.state
    }

    /// Current state as flags.
    #[must_use]
    pub const fn pause_state(&self) -> PauseState {
        PauseState {
            is_paused: matches!(self.state, ControlState::Paused),
            quit_requested: matches!(self.state, ControlState::Quit),
        }
    }

    /// Apply one key read (or the lack of one) and return the new state.
    pub fn apply(&mut self, key: Option<Key>) -> ControlState {
        let Some(command) = key.map(KeyCommand::from) else {
            return self.state;
        };

        self.state = match (self.state, command) {
            (ControlState::Quit, _) | (_, KeyCommand::Quit) => ControlState::Quit,
            (ControlState::Running, KeyCommand::TogglePause) => ControlState::Paused,
            (ControlState::Paused, KeyCommand::TogglePause) => ControlState::Running,
            (state, KeyCommand::Ignore) => state,
        };
        self.state
    }

    /// Show the key hints, read a key, and handle it.
    ///
    /// Returns once the countdown may continue ([`ControlState::Running`]) or
    /// must stop ([`ControlState::Quit`]). While paused this blocks, shifting
    /// `baseline` by the time spent.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn poll<T: Terminal, C: Clock>(
        &mut self,
        renderer: &mut Renderer<T>,
        clock: &C,
        baseline: &mut ClockBaseline,
    ) -> Result<ControlState, TpomoError> {
        renderer.draw_status(RUNNING_HINT)?;
        renderer.refresh()?;

        let key = renderer.read_key()?;
        match self.apply(key) {
            ControlState::Paused => self.wait_while_paused(renderer, clock, baseline),
            state => Ok(state),
        }
    }

    fn wait_while_paused<T: Terminal, C: Clock>(
        &mut self,
        renderer: &mut Renderer<T>,
        clock: &C,
        baseline: &mut ClockBaseline,
    ) -> Result<ControlState, TpomoError> {
        tracing::debug!("countdown paused");
        renderer.draw_status(PAUSED_HINT)?;
        renderer.refresh()?;

        let mut mark = clock.now();
        loop {
            clock.sleep(self.poll_interval);
            let now = clock.now();
            baseline.shift(now.saturating_duration_since(mark));
            mark = now;

            match self.apply(renderer.read_key()?) {
                ControlState::Paused => {}
                ControlState::Running => {
                    tracing::debug!(paused_ms = baseline.paused().as_millis(), "countdown resumed");
                    renderer.draw_status(RUNNING_HINT)?;
                    renderer.refresh()?;
                    return Ok(ControlState::Running);
                }
                ControlState::Quit => return Ok(ControlState::Quit),
            }
        }
    }
}

impl Default for PauseController {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}
