use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::Schedulable;
use crate::error::TasklineError;
use crate::features::nlp::Priority;

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub reminder_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub project: Option<String>,
    pub status: Status,
    /// Manual ordering key; new tasks go to the end.
    pub position: i64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
}

impl Schedulable for Task {
    fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    fn is_open(&self) -> bool {
        self.status == Status::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Completed,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TasklineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            other => Err(TasklineError::Database(format!("unknown task status '{other}'"))),
        }
    }
}

/// A project grouping tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    /// Number of open tasks, filled in by listings.
    #[serde(default)]
    pub open_tasks: u32,
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub reminder_time: Option<NaiveDateTime>,
    pub project: Option<String>,
}

impl NewTask {
    /// Start a task with the given title and medium priority.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the title is empty after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TasklineError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(TasklineError::InvalidInput("task title is empty".to_string()));
        }

        Ok(Self {
            title,
            description: String::new(),
            priority: Priority::Medium,
            due_date: None,
            reminder_time: None,
            project: None,
        })
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    #[must_use]
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }
}
