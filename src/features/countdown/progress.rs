//! Progress indicators drawn above and below the clock.
//!
//! Progress is expressed as the fraction of time *remaining*, so both the bar
//! and the emoji line deplete as the phase runs out.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::phase::PhaseKind;

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";
const DONE_GLYPH: &str = "✅";

/// How the progress line is drawn.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStyle {
    /// A row of phase emoji turning into check marks.
    #[default]
    Emoji,
    /// A block bar that empties as time runs out.
    Bar,
}

/// Fraction of the phase still remaining, in `[0, 1]`.
///
/// `total` must be positive; phases of zero length are rejected when the
/// session is configured.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_fraction(remaining: u64, total: u64) -> f64 {
    debug_assert!(total > 0, "progress of an empty phase");
    if total == 0 {
        return 0.0;
    }
    (remaining as f64 / total as f64).clamp(0.0, 1.0)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scaled(fraction: f64, len: usize) -> usize {
    ((len as f64 * fraction.clamp(0.0, 1.0)).floor() as usize).min(len)
}

/// Render a bar `width` cells wide with `floor(width * fraction)` filled cells.
#[must_use]
pub fn render_bar(fraction: f64, width: usize) -> String {
    let filled = scaled(fraction, width);
    format!(
        "{}{}",
        BAR_FILLED.repeat(filled),
        BAR_EMPTY.repeat(width - filled)
    )
}

/// Render `length` glyphs where elapsed time shows as `done` and the
/// remaining share as `working`.
///
/// At the start of a phase every glyph is `working`; the `done` count grows
/// towards `length` as `fraction` falls to zero.
#[must_use]
pub fn render_emoji_line(fraction: f64, length: usize, working: &str, done: &str) -> String {
    let still_working = scaled(fraction, length);
    format!(
        "{}{}",
        done.repeat(length - still_working),
        working.repeat(still_working)
    )
}

/// Selects and sizes the progress indicator for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressModel {
    style: ProgressStyle,
    width: usize,
}

impl ProgressModel {
    /// Create a model whose output spans `width` terminal columns.
    #[must_use]
    pub const fn new(style: ProgressStyle, width: usize) -> Self {
        Self { style, width }
    }

    /// The configured style.
    #[must_use]
    pub const fn style(&self) -> ProgressStyle {
        self.style
    }

    /// Render the progress line for a phase.
    #[must_use]
    pub fn render(&self, kind: PhaseKind, remaining: u64, total: u64) -> String {
        let fraction = progress_fraction(remaining, total);
        match self.style {
            ProgressStyle::Bar => render_bar(fraction, self.width),
            // Emoji are two columns wide.
            ProgressStyle::Emoji => {
                render_emoji_line(fraction, self.width / 2, kind.emoji(), DONE_GLYPH)
            }
        }
    }
}
