//! Schema setup for the backlog database.
//!
//! The schema version lives in `PRAGMA user_version`. Opening a database
//! brings it up to `CURRENT_VERSION`; an up-to-date database is left alone.

use rusqlite::Connection;

use crate::error::BacklogError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
pub fn get_version(conn: &Connection) -> Result<i32, BacklogError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| BacklogError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), BacklogError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| BacklogError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), BacklogError> {
    let current = get_version(conn)?;

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), BacklogError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(BacklogError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the `stories` table.
///
/// No key or unique constraint on `id`: duplicate ids may coexist.
fn migrate_v1(conn: &Connection) -> Result<(), BacklogError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS stories (
            id TEXT NOT NULL,
            points INTEGER NOT NULL,
            priority INTEGER NOT NULL
        );
        ",
    )
    .map_err(|e| BacklogError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        conn.execute(
            "INSERT INTO stories (id, points, priority) VALUES ('1', 3, 1)",
            [],
        )
        .unwrap();
        // duplicates are allowed
        conn.execute(
            "INSERT INTO stories (id, points, priority) VALUES ('1', 5, 2)",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
