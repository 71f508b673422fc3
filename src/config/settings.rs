//! Configuration settings for tpomo.
//!
//! Settings are loaded from `~/.tpomo/config.yaml`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TpomoError;
use crate::features::countdown::{ProgressStyle, SessionOptions};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Countdown settings.
    pub timer: TimerConfig,
    /// Display settings.
    pub display: DisplayConfig,
}

/// Countdown settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work phase length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Break phase length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Number of work/break cycles.
    #[serde(default = "default_cycles")]
    pub cycles: u32,
    /// Key polling interval while paused, in milliseconds.
    #[serde(default = "default_pause_poll_ms")]
    pub pause_poll_ms: u64,
    /// Ask for durations at startup.
    #[serde(default = "default_true")]
    pub prompt: bool,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Progress line style.
    #[serde(default)]
    pub progress_style: ProgressStyle,
    /// Show a quote under the phase label.
    #[serde(default = "default_true")]
    pub show_quote: bool,
    /// Custom quotes; the built-in list is used when empty.
    #[serde(default)]
    pub quotes: Vec<String>,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_break_minutes() -> u32 {
    5
}

const fn default_cycles() -> u32 {
    1
}

const fn default_pause_poll_ms() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
            cycles: default_cycles(),
            pause_poll_ms: default_pause_poll_ms(),
            prompt: default_true(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            progress_style: ProgressStyle::default(),
            show_quote: default_true(),
            quotes: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TpomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TpomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            TpomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the countdown cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`TpomoError::Config`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), TpomoError> {
        let checks = [
            ("timer.work_minutes", u64::from(self.timer.work_minutes)),
            ("timer.break_minutes", u64::from(self.timer.break_minutes)),
            ("timer.cycles", u64::from(self.timer.cycles)),
            ("timer.pause_poll_ms", self.timer.pause_poll_ms),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(TpomoError::Config(format!("{name} must be positive")));
            }
        }
        Ok(())
    }

    /// Session options derived from these settings.
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            progress_style: self.display.progress_style,
            pause_poll: Duration::from_millis(self.timer.pause_poll_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert_eq!(config.timer.cycles, 1);
        assert_eq!(config.timer.pause_poll_ms, 100);
        assert!(config.timer.prompt);
        assert_eq!(config.display.progress_style, ProgressStyle::Emoji);
        assert!(config.display.show_quote);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.work_minutes, 25);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r"
timer:
  work_minutes: 50
display:
  progress_style: bar
  quotes:
    - Keep going.
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.timer.work_minutes, 50);
        assert_eq!(config.display.progress_style, ProgressStyle::Bar);
        assert_eq!(config.display.quotes, vec!["Keep going.".to_string()]);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.break_minutes, 5);
        assert!(config.display.show_quote);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer:\n  cycles: 0\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("timer.cycles"));
        assert!(err.is_config());
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, map]").unwrap();

        assert!(matches!(
            Config::load_from_path(&config_path),
            Err(TpomoError::Config(_))
        ));
    }

    #[test]
    fn test_session_options() {
        let mut config = Config::default();
        config.timer.pause_poll_ms = 250;
        config.display.progress_style = ProgressStyle::Bar;

        let options = config.session_options();
        assert_eq!(options.pause_poll, Duration::from_millis(250));
        assert_eq!(options.progress_style, ProgressStyle::Bar);
    }
}
