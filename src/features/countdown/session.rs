//! Work/break cycles for a whole session.

use std::time::Duration;

use super::clock::Clock;
use super::pause::DEFAULT_POLL_INTERVAL;
use super::phase::{PhaseKind, PhaseOutcome, PhaseRunner};
use super::progress::{ProgressModel, ProgressStyle};
use crate::error::TpomoError;
use crate::features::quotes::QuoteSource;
use crate::tui::{Renderer, Terminal};

/// Durations and cycle count for a session. Immutable once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownConfig {
    work_seconds: u64,
    break_seconds: u64,
    cycles: u32,
}

impl CountdownConfig {
    /// Validate and build a session configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TpomoError::Config`] if a duration is zero or there are no
    /// cycles.
    pub fn new(work_seconds: u64, break_seconds: u64, cycles: u32) -> Result<Self, TpomoError> {
        if work_seconds == 0 {
            return Err(TpomoError::Config("work time must be positive".to_string()));
        }
        if break_seconds == 0 {
            return Err(TpomoError::Config("break time must be positive".to_string()));
        }
        if cycles == 0 {
            return Err(TpomoError::Config("at least one cycle is required".to_string()));
        }
        Ok(Self {
            work_seconds,
            break_seconds,
            cycles,
        })
    }

    #[must_use]
    pub const fn work_seconds(&self) -> u64 {
        self.work_seconds
    }

    #[must_use]
    pub const fn break_seconds(&self) -> u64 {
        self.break_seconds
    }

    #[must_use]
    pub const fn cycles(&self) -> u32 {
        self.cycles
    }

    const fn phases(&self) -> [(PhaseKind, u64); 2] {
        [
            (PhaseKind::Work, self.work_seconds),
            (PhaseKind::Break, self.break_seconds),
        ]
    }
}

/// Presentation and input settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub progress_style: ProgressStyle,
    /// Key polling interval while paused.
    pub pause_poll: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            progress_style: ProgressStyle::default(),
            pause_poll: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Cancelled,
}

/// What happened during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub cycles: u32,
    pub work_phases_completed: u32,
    pub break_phases_completed: u32,
    /// Active (unpaused) time of completed work phases.
    pub focused: Duration,
}

impl SessionReport {
    const fn new(cycles: u32) -> Self {
        Self {
            outcome: SessionOutcome::Completed,
            cycles,
            work_phases_completed: 0,
            break_phases_completed: 0,
            focused: Duration::ZERO,
        }
    }

    fn record(&mut self, kind: PhaseKind, seconds: u64) {
        match kind {
            PhaseKind::Work => {
                self.work_phases_completed += 1;
                self.focused += Duration::from_secs(seconds);
            }
            PhaseKind::Break => self.break_phases_completed += 1,
        }
    }

    /// Whether the session ran to the end.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.outcome == SessionOutcome::Completed
    }
}

/// Drives all phases of a session on one terminal.
pub struct SessionController<T: Terminal, C: Clock> {
    renderer: Renderer<T>,
    clock: C,
    quotes: Box<dyn QuoteSource>,
    options: SessionOptions,
}

impl<T: Terminal, C: Clock> SessionController<T, C> {
    pub fn new(
        renderer: Renderer<T>,
        clock: C,
        quotes: Box<dyn QuoteSource>,
        options: SessionOptions,
    ) -> Self {
        Self {
            renderer,
            clock,
            quotes,
            options,
        }
    }

    /// The renderer and its terminal.
    pub const fn renderer(&self) -> &Renderer<T> {
        &self.renderer
    }

    /// Consume the controller, returning the renderer.
    pub fn into_renderer(self) -> Renderer<T> {
        self.renderer
    }

    /// Run every cycle of `config`, then wait for a key.
    ///
    /// A quit stops the session at once; the remaining phases are skipped
    /// but the final key gate still runs so the last screen stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails.
    pub fn run_session(&mut self, config: &CountdownConfig) -> Result<SessionReport, TpomoError> {
        let quote = self.quotes.fetch();
        let progress = ProgressModel::new(self.options.progress_style, self.renderer.clock_width());
        let mut report = SessionReport::new(config.cycles());

        tracing::info!(
            work_seconds = config.work_seconds(),
            break_seconds = config.break_seconds(),
            cycles = config.cycles(),
            "session started"
        );

        'cycles: for cycle in 0..config.cycles() {
            for (kind, seconds) in config.phases() {
                let outcome = PhaseRunner::new(
                    &mut self.renderer,
                    &self.clock,
                    progress,
                    quote.as_deref(),
                    self.options.pause_poll,
                )
                .run(kind, seconds, cycle, config.cycles())?;

                match outcome {
                    PhaseOutcome::Completed => report.record(kind, seconds),
                    PhaseOutcome::Cancelled => {
                        report.outcome = SessionOutcome::Cancelled;
                        break 'cycles;
                    }
                }
            }
        }

        tracing::info!(outcome = ?report.outcome, "session finished");

        let title = if report.is_completed() {
            "Session complete"
        } else {
            "Session stopped"
        };
        self.renderer.draw_banner(title, "press any key to exit")?;
        self.renderer.refresh()?;
        self.renderer.wait_key()?;

        Ok(report)
    }
}
