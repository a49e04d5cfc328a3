//! The task store seam.
//!
//! Commands and the TUI talk to storage only through [`TaskStore`], so the
//! `SQLite` backend can be swapped or mocked.

use chrono::NaiveDate;

use crate::core::TaskFilter;
use crate::error::TasklineError;
use crate::tasks::types::{NewTask, Project, Task};

/// Persistent storage for tasks and projects.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Create a task, appending it after existing tasks.
    ///
    /// A named project that does not exist yet is created.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn create_task(&self, task: &NewTask) -> Result<Task, TasklineError>;

    /// Fetch one task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    fn get_task(&self, id: i64) -> Result<Task, TasklineError>;

    /// List tasks matching `filter`, ordered by position.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_tasks(&self, filter: &TaskFilter, today: NaiveDate) -> Result<Vec<Task>, TasklineError>;

    /// Mark a task completed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    fn complete_task(&self, id: i64) -> Result<Task, TasklineError>;

    /// Mark a completed task open again.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    fn reopen_task(&self, id: i64) -> Result<Task, TasklineError>;

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    fn delete_task(&self, id: i64) -> Result<(), TasklineError>;

    /// Create a project.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty or duplicate name.
    fn create_project(&self, name: &str) -> Result<Project, TasklineError>;

    /// List all projects with their open task counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_projects(&self) -> Result<Vec<Project>, TasklineError>;

    /// Look up a project by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn find_project(&self, name: &str) -> Result<Option<Project>, TasklineError>;
}
