//! JSON output formatting for backlog.

use serde_json::json;

use crate::core::{SprintPlan, Story};
use crate::error::BacklogError;

/// Format stories as JSON
///
/// # Errors
///
/// Returns `BacklogError::Parse` if JSON serialization fails.
pub fn format_stories_json(stories: &[Story], list_name: &str) -> Result<String, BacklogError> {
    let output = json!({
        "list": list_name,
        "count": stories.len(),
        "items": stories
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single story as JSON
///
/// # Errors
///
/// Returns `BacklogError::Parse` if JSON serialization fails.
pub fn format_story_json(story: &Story, action: &str) -> Result<String, BacklogError> {
    let output = json!({
        "action": action.to_lowercase(),
        "story": story
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a sprint plan as JSON
///
/// # Errors
///
/// Returns `BacklogError::Parse` if JSON serialization fails.
pub fn format_sprint_json(plan: &SprintPlan) -> Result<String, BacklogError> {
    let output = json!({
        "capacity": plan.capacity,
        "committed_points": plan.committed_points,
        "remaining_points": plan.remaining_points(),
        "count": plan.stories.len(),
        "items": plan.stories
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
