//! Feature implementations for tpomo.
//!
//! - Countdown: phases, ticking, pause and the session loop
//! - Quotes: the line shown under the phase label

pub mod countdown;
pub mod quotes;
