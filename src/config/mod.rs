//! Configuration management for backlog.
//!
//! This module handles loading and saving configuration from `~/.backlog/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, SprintConfig, StorageConfig};
