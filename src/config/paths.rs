//! Path resolution for tpomo configuration and log files.
//!
//! All tpomo data is stored in `~/.tpomo/`:
//! - `config.yaml` - Main configuration file
//! - `logs/tpomo.log` - Trace log
//! - `crash.log` - Reports of sessions that failed unexpectedly

use std::path::PathBuf;

use crate::error::TpomoError;

/// Paths to tpomo configuration and log files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tpomo/`
    pub root: PathBuf,
    /// Config file: `~/.tpomo/config.yaml`
    pub config_file: PathBuf,
    /// Logs directory: `~/.tpomo/logs/`
    pub logs: PathBuf,
    /// Log file: `~/.tpomo/logs/tpomo.log`
    pub log_file: PathBuf,
    /// Crash report file: `~/.tpomo/crash.log`
    pub crash_log: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TpomoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TpomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".tpomo")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        let logs = root.join("logs");
        Self {
            config_file: root.join("config.yaml"),
            log_file: logs.join("tpomo.log"),
            crash_log: root.join("crash.log"),
            logs,
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TpomoError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    TpomoError::Config(format!("Failed to create directory {}: {e}", dir.display()))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".tpomo"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-tpomo");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.logs, root.join("logs"));
        assert_eq!(paths.log_file, root.join("logs").join("tpomo.log"));
        assert_eq!(paths.crash_log, root.join("crash.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
        assert!(paths.logs.exists());
    }
}
