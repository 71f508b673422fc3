//! Time formatting for the countdown clock and the session summary.

use std::time::Duration;

/// Format a number of seconds as `HH:MM:SS`.
///
/// Hours are not wrapped, so a 100 hour countdown prints as `100:00:00`.
#[must_use]
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.as_secs() / 60;

    if total_minutes < 1 {
        let seconds = d.as_secs();
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}
