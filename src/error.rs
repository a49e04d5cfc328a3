//! Error types for taskline.

use thiserror::Error;

/// Errors returned by the task store, configuration and command layers.
///
/// The natural-language parser never produces one of these: unparseable
/// input simply yields fewer populated fields.
#[derive(Debug, Error)]
pub enum TasklineError {
    /// Configuration could not be read, written or resolved.
    #[error("configuration error: {0}")]
    Config(String),

    /// A `SQLite` operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User input was rejected (empty title, duplicate project, bad flag).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A task or project with the given identifier does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What was looked up ("task", "project").
        kind: &'static str,
        /// The identifier that was not found.
        id: String,
    },
}

impl From<rusqlite::Error> for TasklineError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}

impl TasklineError {
    /// Shorthand for a missing task.
    #[must_use]
    pub fn task_not_found(id: i64) -> Self {
        Self::NotFound {
            kind: "task",
            id: id.to_string(),
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::NotFound { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = TasklineError::task_not_found(42);
        assert_eq!(err.to_string(), "task not found: 42");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(TasklineError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(TasklineError::Database("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_from_rusqlite() {
        let err: TasklineError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, TasklineError::Database(_)));
    }
}
