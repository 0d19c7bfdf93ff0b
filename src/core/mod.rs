//! Core abstractions for backlog.
//!
//! This module holds the story type, the datastore contract and the sprint
//! selection algorithm. Nothing here knows about a concrete storage engine.

pub mod sprint;
mod story;
mod traits;

pub use sprint::{parse_capacity, select_sprint, sort_for_sprint, SprintPlan};
pub use story::Story;
pub use traits::Datastore;

#[cfg(test)]
pub use traits::MockDatastore;
