//! Drift-corrected per-second loop for one phase.

use std::time::Duration;

use super::clock::{Clock, ClockBaseline};
use super::pause::ControlState;
use super::phase::PhaseOutcome;
use crate::error::TpomoError;

/// Length of one countdown tick.
pub const TICK: Duration = Duration::from_secs(1);

/// Runs the tick loop of a single phase.
///
/// Each tick sleeps only until the baseline's deadline rather than for a
/// fixed second, so render and input time never accumulates as drift.
pub struct TickScheduler<'c, C: Clock> {
    clock: &'c C,
}

impl<'c, C: Clock> TickScheduler<'c, C> {
    pub const fn new(clock: &'c C) -> Self {
        Self { clock }
    }

    /// Count down from `total_seconds` to 1, calling `on_tick` once per
    /// second with the remaining seconds and the baseline.
    ///
    /// `on_tick` renders and handles input. Returning [`ControlState::Quit`]
    /// stops the loop at once, without sleeping or further ticks.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `on_tick`.
    pub fn run<F>(&self, total_seconds: u64, mut on_tick: F) -> Result<PhaseOutcome, TpomoError>
    where
        F: FnMut(u64, &mut ClockBaseline) -> Result<ControlState, TpomoError>,
    {
        let mut baseline = ClockBaseline::new(self.clock.now(), TICK);

        for remaining in (1..=total_seconds).rev() {
            if on_tick(remaining, &mut baseline)? == ControlState::Quit {
                tracing::debug!(remaining, "tick loop cancelled");
                return Ok(PhaseOutcome::Cancelled);
            }

            let now = self.clock.now();
            let wait = baseline.until_next_tick(now);
            if wait.is_zero() {
                tracing::trace!(
                    remaining,
                    late_ms = now.saturating_duration_since(baseline.next_tick_at()).as_millis(),
                    "tick overran its slot"
                );
            }
            self.clock.sleep(wait);
            baseline.advance(TICK);
        }

        tracing::trace!(paused_ms = baseline.paused().as_millis(), "tick loop finished");
        Ok(PhaseOutcome::Completed)
    }
}
