//! Storage engines for backlog.
//!
//! Two [`Datastore`](crate::core::Datastore) implementations ship with the
//! crate:
//! - [`SqliteDatastore`]: a `stories` table in a local `SQLite` file
//! - [`MemoryDatastore`]: a plain in-process list, for tests and demos

mod database;
mod memory;
mod migrations;
mod sqlite;

pub use database::Database;
pub use memory::MemoryDatastore;
pub use sqlite::SqliteDatastore;
