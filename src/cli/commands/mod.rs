//! Command implementations for backlog.
//!
//! Each command returns the text to print, already rendered for the
//! requested output format.

mod completions;

pub use completions::completions;

use tracing::info;

use crate::backlog::Backlog;
use crate::cli::args::{AddArgs, OutputFormat};
use crate::core::{parse_capacity, Datastore, Story};
use crate::error::BacklogError;
use crate::output::{format_sprint, format_stories, format_story};

/// Execute add command
///
/// # Errors
///
/// Returns an error if the story cannot be stored or output formatting fails.
pub fn add<D: Datastore>(
    backlog: &Backlog<D>,
    args: &AddArgs,
    format: OutputFormat,
) -> Result<String, BacklogError> {
    let story = Story::new(args.id.as_str(), args.points, args.priority);
    backlog.add(&story)?;
    format_story(&story, "Added", format)
}

/// Execute remove command
///
/// # Errors
///
/// Returns `BacklogError::StoryNotFound` if no single story has `id`, or an
/// error if storage or output formatting fails.
pub fn remove<D: Datastore>(
    backlog: &Backlog<D>,
    id: &str,
    format: OutputFormat,
) -> Result<String, BacklogError> {
    let story = backlog.remove(id)?;
    format_story(&story, "Removed", format)
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if storage or output formatting fails.
pub fn list<D: Datastore>(backlog: &Backlog<D>, format: OutputFormat) -> Result<String, BacklogError> {
    let stories = backlog.stories()?;
    format_stories(&stories, "Backlog", format)
}

/// Execute sprint command
///
/// `capacity` is the raw argument; `default_capacity` comes from config and
/// is used when no argument was given.
///
/// # Errors
///
/// Returns `BacklogError::InvalidCapacity` if the capacity is missing or not
/// an integer, or an error if storage or output formatting fails.
pub fn sprint<D: Datastore>(
    backlog: &Backlog<D>,
    capacity: Option<&str>,
    default_capacity: Option<i64>,
    format: OutputFormat,
) -> Result<String, BacklogError> {
    let capacity = match (capacity, default_capacity) {
        (Some(raw), _) => parse_capacity(raw)?,
        (None, Some(configured)) => {
            info!(capacity = configured, "using configured default capacity");
            configured
        }
        (None, None) => {
            return Err(BacklogError::InvalidCapacity(
                "no capacity given and sprint.default_capacity is not configured".to_string(),
            ));
        }
    };

    let plan = backlog.plan_sprint(capacity)?;
    format_sprint(&plan, format)
}
