//! Path resolution for backlog configuration and data files.
//!
//! All backlog data is stored in `~/.backlog/`:
//! - `config.yaml` - Main configuration file
//! - `backlog.db` - `SQLite` database holding the stories

use std::path::PathBuf;

use crate::error::BacklogError;

/// Paths to backlog configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.backlog/`
    pub root: PathBuf,
    /// Config file: `~/.backlog/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.backlog/backlog.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BacklogError> {
        let home = std::env::var("HOME").map_err(|_| {
            BacklogError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".backlog")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("backlog.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), BacklogError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                BacklogError::Config(format!(
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
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".backlog"))
        })
    }
}
