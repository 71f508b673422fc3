//! The countdown engine.
//!
//! Runs work/break cycles against a terminal:
//! - Drift-corrected one-second ticks
//! - Pause/resume that excludes paused time
//! - Quit that stops every enclosing phase at once
//! - Bar or emoji progress lines

pub mod clock;
pub mod format;
pub mod pause;
pub mod phase;
pub mod progress;
pub mod scheduler;
pub mod session;

pub use clock::{Clock, ClockBaseline, SystemClock};
pub use format::{format_duration, format_hms};
pub use pause::{ControlState, KeyCommand, PauseController, PauseState};
pub use phase::{PhaseKind, PhaseOutcome, PhaseRunner, PhaseState};
pub use progress::{progress_fraction, render_bar, render_emoji_line, ProgressModel, ProgressStyle};
pub use scheduler::{TickScheduler, TICK};
pub use session::{CountdownConfig, SessionController, SessionOptions, SessionOutcome, SessionReport};
