//! Trace logging and crash reports.
//!
//! The TUI owns the screen, so logs go to `~/.tpomo/logs/tpomo.log`. The
//! level is read from `TPOMO_LOG` (default `info`).

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Paths;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TPOMO_LOG";

/// Install the file logger.
///
/// Returns `false` if the log file could not be opened; the program keeps
/// running without logs in that case.
pub fn init(paths: &Paths) -> bool {
    if paths.ensure_dirs().is_err() {
        return false;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.log_file)
    else {
        return false;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

/// Append a timestamped crash report for `error` to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_crash_report(path: &Path, error: &impl Display) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "[{}] tpomo {} crashed",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(file, "{error}")?;
    writeln!(file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_crash_report_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("crash.log");

        write_crash_report(&path, &"terminal error: no tty").unwrap();
        write_crash_report(&path, &"second failure").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("terminal error: no tty"));
        assert!(contents.contains("second failure"));
        assert_eq!(contents.matches("crashed").count(), 2);
    }
}
