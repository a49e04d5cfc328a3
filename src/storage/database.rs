//! `SQLite` database connection.
//!
//! The database is stored at `~/.taskline/taskline.db` and holds the
//! `projects` and `tasks` tables.

use std::path::Path;

use rusqlite::Connection;

use crate::config::Paths;
use crate::error::TasklineError;

use super::migrations;

/// Database connection wrapper.
pub struct Database {
    pub(super) conn: Connection,
}

impl Database {
    /// Open the database at the default location.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open() -> Result<Self, TasklineError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Self::open_at(&paths.database)
    }

    /// Open the database at a specific path.
    ///
    /// Creates the database file and runs migrations if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_at(path: &Path) -> Result<Self, TasklineError> {
        tracing::debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path).map_err(|e| {
            TasklineError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        Self::init(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrations fail.
    pub fn open_in_memory() -> Result<Self, TasklineError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            TasklineError::Database(format!("Failed to open in-memory database: {e}"))
        })?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, TasklineError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| TasklineError::Database(format!("Failed to enable foreign keys: {e}")))?;

        let db = Self { conn };
        migrations::run(&db.conn)?;
        Ok(db)
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<i32, TasklineError> {
        migrations::get_version(&self.conn)
    }
}
