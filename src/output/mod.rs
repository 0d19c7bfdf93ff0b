//! Output formatting for backlog.
//!
//! This module renders stories and sprints for the terminal or as JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::{SprintPlan, Story};
use crate::error::BacklogError;

pub use json::*;
pub use pretty::*;

/// Format a list of stories based on output format
///
/// # Errors
///
/// Returns `BacklogError::Parse` if JSON serialization fails.
pub fn format_stories(
    stories: &[Story],
    title: &str,
    format: OutputFormat,
) -> Result<String, BacklogError> {
    match format {
        OutputFormat::Pretty => Ok(format_stories_pretty(stories, title)),
        OutputFormat::Json => format_stories_json(stories, title),
    }
}

/// Format a single story with an action label ("Added", "Removed")
///
/// # Errors
///
/// Returns `BacklogError::Parse` if JSON serialization fails.
pub fn format_story(story: &Story, action: &str, format: OutputFormat) -> Result<String, BacklogError> {
    match format {
        OutputFormat::Pretty => Ok(format_story_pretty(story, action)),
        OutputFormat::Json => format_story_json(story, action),
    }
}

/// Format a sprint plan based on output format
///
/// # Errors
///
/// Returns `BacklogError::Parse` if JSON serialization fails.
pub fn format_sprint(plan: &SprintPlan, format: OutputFormat) -> Result<String, BacklogError> {
    match format {
        OutputFormat::Pretty => Ok(format_sprint_pretty(plan)),
        OutputFormat::Json => format_sprint_json(plan),
    }
}
