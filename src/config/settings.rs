//! Configuration settings for backlog.
//!
//! Settings are loaded from `~/.backlog/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::BacklogError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Storage settings.
    pub storage: StorageConfig,
    /// Sprint planning settings.
    pub sprint: SprintConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default)]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate's global switch.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file to use instead of `~/.backlog/backlog.db`.
    pub database: Option<PathBuf>,
}

/// Sprint planning settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SprintConfig {
    /// Capacity used by `backlog sprint` when none is given.
    pub default_capacity: Option<i64>,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: ColorSetting::default(),
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
    pub fn load_from_path(path: &Path) -> Result<Self, BacklogError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::read(path)
    }

    /// Load configuration from a path the user asked for explicitly.
    ///
    /// Unlike [`Config::load_from_path`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is missing or cannot be parsed.
    pub fn load_required(path: &Path) -> Result<Self, BacklogError> {
        if !path.exists() {
            return Err(BacklogError::Config(format!(
                "Config file {} does not exist",
                path.display()
            )));
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, BacklogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            BacklogError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            BacklogError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
