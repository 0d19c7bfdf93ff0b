//! The persistence contract the backlog depends on.

#[cfg(test)]
use mockall::automock;

use super::Story;
use crate::error::BacklogError;

/// Storage for story records.
///
/// Implementations hold an unordered set of stories. Creating a story with
/// an id that already exists stores a second record; nothing enforces
/// uniqueness.
#[cfg_attr(test, automock)]
pub trait Datastore {
    /// Persist a new record.
    ///
    /// # Errors
    ///
    /// Returns `BacklogError::Database` if the engine fails.
    fn create_story(&self, story: &Story) -> Result<(), BacklogError>;

    /// Every persisted story, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns `BacklogError::Database` if the engine fails.
    fn read_stories(&self) -> Result<Vec<Story>, BacklogError>;

    /// Remove the record with `id` if exactly one exists.
    ///
    /// Returns the removed story, or `None` when zero or several records
    /// match. The store is left untouched in the `None` case.
    ///
    /// # Errors
    ///
    /// Returns `BacklogError::Database` if the engine fails.
    fn delete_story(&self, id: &str) -> Result<Option<Story>, BacklogError>;
}
