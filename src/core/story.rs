//! The story value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit of work in the backlog.
///
/// Lower `priority` values are more important: priority 1 outranks
/// priority 10. Points are taken as given, including zero and negatives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Story {
    id: String,
    points: i64,
    priority: i64,
}

impl Story {
    /// Create a story.
    pub fn new(id: impl Into<String>, points: i64, priority: i64) -> Self {
        Self {
            id: id.into(),
            points,
            priority,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn points(&self) -> i64 {
        self.points
    }

    #[must_use]
    pub const fn priority(&self) -> i64 {
        self.priority
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Story {}: (Pr{} Pts{})", self.id, self.priority, self.points)
    }
}
