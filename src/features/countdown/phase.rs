//! A single work or break phase.

use std::time::Duration;

use super::clock::Clock;
use super::pause::PauseController;
use super::progress::ProgressModel;
use super::scheduler::TickScheduler;
use crate::error::TpomoError;
use crate::tui::{Renderer, Terminal};

/// Kind of phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Work,
    Break,
}

impl PhaseKind {
    /// Label shown in large glyphs under the clock.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Break => "BREAK",
        }
    }

    /// Emoji used by the progress line while the phase is running.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Work => "🍅",
            Self::Break => "🍵",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Work => write!(f, "work"),
            Self::Break => write!(f, "break"),
        }
    }
}

/// How a phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// Every tick ran.
    Completed,
    /// The user quit.
    Cancelled,
}

/// Live state of the running phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseState {
    pub kind: PhaseKind,
    pub total_seconds: u64,
    /// Seconds left, including the one being shown.
    pub remaining_seconds: u64,
    /// Zero-based cycle number.
    pub cycle_index: u32,
    pub cycle_count: u32,
}

impl PhaseState {
    #[must_use]
    pub const fn new(kind: PhaseKind, total_seconds: u64, cycle_index: u32, cycle_count: u32) -> Self {
        Self {
            kind,
            total_seconds,
            remaining_seconds: total_seconds,
            cycle_index,
            cycle_count,
        }
    }

    /// Label such as `WORK [1/4]`, with cycles counted from one.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} [{}/{}]",
            self.kind.label(),
            self.cycle_index + 1,
            self.cycle_count
        )
    }
}

/// Runs one phase: renders each tick, handles pause and quit.
pub struct PhaseRunner<'a, T: Terminal, C: Clock> {
    renderer: &'a mut Renderer<T>,
    clock: &'a C,
    progress: ProgressModel,
    quote: Option<&'a str>,
    poll_interval: Duration,
}

impl<'a, T: Terminal, C: Clock> PhaseRunner<'a, T, C> {
    pub fn new(
        renderer: &'a mut Renderer<T>,
        clock: &'a C,
        progress: ProgressModel,
        quote: Option<&'a str>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            renderer,
            clock,
            progress,
            quote,
            poll_interval,
        }
    }

    /// Count down one phase of `total_seconds`.
    ///
    /// A cancelled phase is final: the caller must not start another one.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run(
        &mut self,
        kind: PhaseKind,
        total_seconds: u64,
        cycle_index: u32,
        cycle_count: u32,
    ) -> Result<PhaseOutcome, TpomoError> {
        let mut state = PhaseState::new(kind, total_seconds, cycle_index, cycle_count);
        let mut pause = PauseController::new(self.poll_interval);
        let renderer = &mut *self.renderer;
        let clock = self.clock;
        let progress = self.progress;
        let quote = self.quote;

        tracing::info!(phase = %kind, seconds = total_seconds, cycle = cycle_index + 1, "phase started");

        let outcome = TickScheduler::new(clock).run(total_seconds, |remaining, baseline| {
            state.remaining_seconds = remaining;
            renderer.draw_frame(&state, &progress, quote)?;
            pause.poll(renderer, clock, baseline)
        })?;

        tracing::info!(phase = %kind, ?outcome, "phase ended");
        Ok(outcome)
    }
}
