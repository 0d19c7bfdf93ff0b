//! Sprint selection.
//!
//! A sprint is picked greedily: stories are ordered by priority (lowest
//! number first) and, within a priority, by points (largest first). Each
//! story is then taken if it still fits in the remaining capacity. A story
//! that does not fit is skipped for good, even when later capacity would
//! allow it. This is an approximation, not an optimal packing.

use std::cmp::Reverse;

use serde::Serialize;

use super::Story;
use crate::error::BacklogError;

/// Sort stories into evaluation order: priority ascending, points descending.
///
/// The sort is stable, so stories equal on both keys keep their input order.
pub fn sort_for_sprint(stories: &mut [Story]) {
    stories.sort_by_key(|story| (story.priority(), Reverse(story.points())));
}

/// Select the stories that make up a sprint of `capacity` points.
///
/// The result is in evaluation order.
#[must_use]
pub fn select_sprint(mut stories: Vec<Story>, capacity: i64) -> Vec<Story> {
    sort_for_sprint(&mut stories);

    // i128 so that summing i64 points cannot overflow
    let mut accumulated: i128 = 0;
    let mut sprint = Vec::new();
    for story in stories {
        let next = accumulated + i128::from(story.points());
        if next <= i128::from(capacity) {
            accumulated = next;
            sprint.push(story);
        }
    }
    sprint
}

/// Interpret user-supplied text as a sprint capacity.
///
/// Accepts surrounding whitespace, an optional sign, and `_` between
/// digits (`" 1_000 "`, `"+5"`, `"-1"`).
///
/// # Errors
///
/// Returns `BacklogError::InvalidCapacity` if the text is not an integer
/// or does not fit in an `i64`.
pub fn parse_capacity(raw: &str) -> Result<i64, BacklogError> {
    let trimmed = raw.trim();
    let invalid = || BacklogError::InvalidCapacity(format!("`{raw}` is not an integer"));

    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return Err(invalid());
    }

    let mut normalized: String = digits.chars().filter(|c| *c != '_').collect();
    if negative {
        normalized.insert(0, '-');
    }
    normalized.parse::<i64>().map_err(|_| {
        BacklogError::InvalidCapacity(format!("`{raw}` is out of range for a capacity"))
    })
}

/// A computed sprint, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintPlan {
    pub capacity: i64,
    pub stories: Vec<Story>,
    pub committed_points: i64,
}

impl SprintPlan {
    /// Wrap a selection made for `capacity`.
    #[must_use]
    pub fn new(capacity: i64, stories: Vec<Story>) -> Self {
        let sum: i128 = stories.iter().map(|story| i128::from(story.points())).sum();
        let committed_points =
            i64::try_from(sum).unwrap_or(if sum < 0 { i64::MIN } else { i64::MAX });
        Self {
            capacity,
            stories,
            committed_points,
        }
    }

    /// Capacity left unused by the selection.
    #[must_use]
    pub const fn remaining_points(&self) -> i64 {
        self.capacity.saturating_sub(self.committed_points)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}
