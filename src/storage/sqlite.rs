//! `SQLite`-backed story storage.

use rusqlite::{params, Row};
use tracing::warn;

use super::Database;
use crate::core::{Datastore, Story};
use crate::error::BacklogError;

/// Stories persisted in the `stories` table of a [`Database`].
pub struct SqliteDatastore {
    db: Database,
}

impl SqliteDatastore {
    /// Create storage over an open database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a reference to the underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }
}

impl Datastore for SqliteDatastore {
    fn create_story(&self, story: &Story) -> Result<(), BacklogError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO stories (id, points, priority) VALUES (?1, ?2, ?3)",
                params![story.id(), story.points(), story.priority()],
            )
            .map_err(|e| BacklogError::Database(format!("Failed to insert story: {e}")))?;

        Ok(())
    }

    fn read_stories(&self) -> Result<Vec<Story>, BacklogError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare("SELECT id, points, priority FROM stories ORDER BY rowid")
            .map_err(|e| BacklogError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_story)
            .map_err(|e| BacklogError::Database(format!("Failed to query stories: {e}")))?;

        let mut stories = Vec::new();
        for row in rows {
            stories.push(row.map_err(|e| BacklogError::Database(e.to_string()))?);
        }

        Ok(stories)
    }

    fn delete_story(&self, id: &str) -> Result<Option<Story>, BacklogError> {
        let tx = self
            .db
            .connection()
            .unchecked_transaction()
            .map_err(|e| BacklogError::Database(format!("Failed to begin transaction: {e}")))?;

        let matches = {
            let mut stmt = tx
                .prepare("SELECT id, points, priority FROM stories WHERE id = ?1")
                .map_err(|e| BacklogError::Database(format!("Failed to prepare query: {e}")))?;
            let rows = stmt
                .query_map([id], row_to_story)
                .map_err(|e| BacklogError::Database(format!("Failed to query story: {e}")))?;

            let mut matches = Vec::new();
            for row in rows {
                matches.push(row.map_err(|e| BacklogError::Database(e.to_string()))?);
            }
            matches
        };

        let removed = match <[Story; 1]>::try_from(matches) {
            Ok([story]) => {
                tx.execute("DELETE FROM stories WHERE id = ?1", [id])
                    .map_err(|e| BacklogError::Database(format!("Failed to delete story: {e}")))?;
                Some(story)
            }
            Err(matches) => {
                if matches.len() > 1 {
                    warn!(id, count = matches.len(), "refusing to delete duplicated story id");
                }
                None
            }
        };

        tx.commit()
            .map_err(|e| BacklogError::Database(format!("Failed to commit delete: {e}")))?;

        Ok(removed)
    }
}

fn row_to_story(row: &Row<'_>) -> rusqlite::Result<Story> {
    Ok(Story::new(
        row.get::<_, String>(0)?,
        row.get(1)?,
        row.get(2)?,
    ))
}
