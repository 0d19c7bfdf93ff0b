//! The backlog: validated mutation of stories and sprint planning.

use tracing::debug;

use crate::core::{select_sprint, Datastore, SprintPlan, Story};
use crate::error::BacklogError;

/// A backlog of stories kept in some [`Datastore`].
pub struct Backlog<D: Datastore> {
    datastore: D,
}

impl<D: Datastore> Backlog<D> {
    /// Create a backlog over `datastore`.
    pub const fn new(datastore: D) -> Self {
        Self { datastore }
    }

    /// Add a story.
    ///
    /// Ids are not checked for uniqueness here.
    ///
    /// # Errors
    ///
    /// Returns the datastore's error if the story cannot be stored.
    pub fn add(&self, story: &Story) -> Result<(), BacklogError> {
        debug!(
            id = story.id(),
            points = story.points(),
            priority = story.priority(),
            "adding story"
        );
        self.datastore.create_story(story)
    }

    /// Remove the story with `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BacklogError::StoryNotFound` if no single story has `id`,
    /// or the datastore's error if the lookup fails.
    pub fn remove(&self, id: &str) -> Result<Story, BacklogError> {
        match self.datastore.delete_story(id)? {
            Some(story) => {
                debug!(id, "removed story");
                Ok(story)
            }
            None => Err(BacklogError::story_not_found(id)),
        }
    }

    /// Every story in the backlog, in datastore order.
    ///
    /// # Errors
    ///
    /// Returns the datastore's error if the stories cannot be read.
    pub fn stories(&self) -> Result<Vec<Story>, BacklogError> {
        self.datastore.read_stories()
    }

    /// The stories that fit a sprint of `total_points_achievable` points.
    ///
    /// Higher-priority stories are tried first, larger ones first within a
    /// priority; see [`select_sprint`].
    ///
    /// # Errors
    ///
    /// Returns the datastore's error if the stories cannot be read.
    pub fn sprint(&self, total_points_achievable: i64) -> Result<Vec<Story>, BacklogError> {
        let stories = self.stories()?;
        let available = stories.len();
        let sprint = select_sprint(stories, total_points_achievable);
        debug!(
            capacity = total_points_achievable,
            available,
            selected = sprint.len(),
            "computed sprint"
        );
        Ok(sprint)
    }

    /// Like [`Backlog::sprint`], with totals for display.
    ///
    /// # Errors
    ///
    /// Returns the datastore's error if the stories cannot be read.
    pub fn plan_sprint(&self, total_points_achievable: i64) -> Result<SprintPlan, BacklogError> {
        let stories = self.sprint(total_points_achievable)?;
        let plan = SprintPlan::new(total_points_achievable, stories);
        debug!(
            committed = plan.committed_points,
            remaining = plan.remaining_points(),
            "planned sprint"
        );
        Ok(plan)
    }
}
