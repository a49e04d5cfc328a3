//! Path resolution for taskline configuration and data files.
//!
//! All taskline data is stored in `~/.taskline/` (or `$TASKLINE_HOME`):
//! - `config.yaml` - Main configuration file
//! - `taskline.db` - SQLite database of tasks and projects

use std::path::PathBuf;

use crate::error::TasklineError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "TASKLINE_HOME";

/// Paths to taskline configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskline/`
    pub root: PathBuf,
    /// Config file: `~/.taskline/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.taskline/taskline.db`
    pub database: PathBuf,
}

impl Paths {
    /// Resolve paths from `$TASKLINE_HOME`, falling back to `~/.taskline`.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, TasklineError> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(root)));
        }

        let home = std::env::var("HOME")
            .map_err(|_| TasklineError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskline")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("taskline.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TasklineError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TasklineError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
