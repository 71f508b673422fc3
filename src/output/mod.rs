//! Output formatting for tpomo.
//!
//! Printed to the normal screen after the TUI has been torn down.

use colored::Colorize;

use crate::features::countdown::{format_duration, SessionReport};

/// One-line summary of a finished session.
#[must_use]
pub fn session_summary(report: &SessionReport) -> String {
    let focused = format_duration(report.focused);
    if report.is_completed() {
        format!(
            "✅ {}/{} cycles completed ({} focused)",
            report.work_phases_completed, report.cycles, focused
        )
        .green()
        .to_string()
    } else {
        format!(
            "⏹️  Session stopped after {}/{} work phases ({} focused)",
            report.work_phases_completed, report.cycles, focused
        )
        .yellow()
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::countdown::SessionOutcome;

    fn report(outcome: SessionOutcome, work: u32) -> SessionReport {
        SessionReport {
            outcome,
            cycles: 2,
            work_phases_completed: work,
            break_phases_completed: work,
            focused: Duration::from_secs(u64::from(work) * 25 * 60),
        }
    }

    #[test]
    fn test_completed_summary() {
        let line = session_summary(&report(SessionOutcome::Completed, 2));
        assert!(line.contains("2/2 cycles completed"));
        assert!(line.contains("50 minutes focused"));
    }

    #[test]
    fn test_stopped_summary() {
        let line = session_summary(&report(SessionOutcome::Cancelled, 1));
        assert!(line.contains("stopped after 1/2 work phases"));
        assert!(line.contains("25 minutes focused"));
    }
}
