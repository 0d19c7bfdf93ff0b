//! Error types for backlog.

use thiserror::Error;

/// Errors surfaced by the backlog library and CLI.
#[derive(Debug, Error)]
pub enum BacklogError {
    /// No single story matched the identifier given to `remove`.
    #[error("{0}")]
    StoryNotFound(String),

    /// A sprint capacity could not be interpreted as an integer.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    /// The storage engine failed.
    #[error("database error: {0}")]
    Database(String),

    /// Paths or configuration could not be resolved or read.
    #[error("config error: {0}")]
    Config(String),

    /// JSON rendering failed.
    #[error("failed to serialize output: {0}")]
    Parse(#[from] serde_json::Error),
}

impl BacklogError {
    /// Build the `StoryNotFound` error for an identifier.
    #[must_use]
    pub fn story_not_found(id: &str) -> Self {
        Self::StoryNotFound(format!("story `{id}` was not found in the datastore"))
    }
}
