//! Monotonic time source and the tick baseline built on it.

use std::time::{Duration, Instant};

/// Monotonic time and sleeping.
///
/// The countdown only ever reads time and sleeps through this trait, so it
/// can be driven by virtual time in tests.
pub trait Clock {
    /// Current monotonic instant.
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Scheduling reference for one phase.
///
/// `next_tick_at` moves forward one tick per completed second and by any
/// time spent paused, so paused time never counts against the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockBaseline {
    anchor: Instant,
    next_tick_at: Instant,
    paused: Duration,
}

impl ClockBaseline {
    /// Start a baseline at `anchor` with the first tick due one `tick` later.
    #[must_use]
    pub fn new(anchor: Instant, tick: Duration) -> Self {
        Self {
            anchor,
            next_tick_at: anchor + tick,
            paused: Duration::ZERO,
        }
    }

    /// When the phase started.
    #[must_use]
    pub const fn anchor(&self) -> Instant {
        self.anchor
    }

    /// When the current tick ends.
    #[must_use]
    pub const fn next_tick_at(&self) -> Instant {
        self.next_tick_at
    }

    /// Total time excluded from the countdown so far.
    #[must_use]
    pub const fn paused(&self) -> Duration {
        self.paused
    }

    /// How long to sleep from `now` until the current tick ends.
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick_at.saturating_duration_since(now)
    }

    /// Move on to the next tick.
    pub fn advance(&mut self, tick: Duration) {
        self.next_tick_at += tick;
    }

    /// Push the current tick deadline back by time spent paused.
    pub fn shift(&mut self, paused: Duration) {
        self.next_tick_at += paused;
        self.paused += paused;
    }
}
