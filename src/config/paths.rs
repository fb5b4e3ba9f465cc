//! Path resolution for taskbot configuration and data files.
//!
//! All taskbot data is stored in `~/.taskbot/`:
//! - `config.yaml` - Main configuration file
//! - `taskbot.db` - `SQLite` database with the task records

use std::path::PathBuf;

use crate::error::TaskbotError;

/// Paths to taskbot configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskbot/`
    pub root: PathBuf,
    /// Config file: `~/.taskbot/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.taskbot/taskbot.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskbotError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskbotError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskbot")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("taskbot.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskbotError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskbotError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".taskbot")))
    }
}
