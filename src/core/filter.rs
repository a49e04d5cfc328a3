//! Task filtering.
//!
//! A [`TaskFilter`] combines optional criteria with AND semantics:
//!
//! ```text
//! status    open (default) | completed | all
//! project   project name, case-insensitive
//! priority  low | medium | high
//! due       overdue | today | upcoming | none
//! search    substring of title or description, case-insensitive
//! ```

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::Schedulable;
use crate::features::nlp::Priority;
use crate::tasks::{Status, Task};

/// Which completion states to include.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Only open tasks.
    #[default]
    Open,
    /// Only completed tasks.
    Completed,
    /// Everything.
    All,
}

/// Due-date bucket.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueFilter {
    /// Open and due before today.
    Overdue,
    /// Due today.
    Today,
    /// Due within the next seven days, excluding today.
    Upcoming,
    /// No due date.
    None,
}

/// Criteria for selecting tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub project: Option<String>,
    pub priority: Option<Priority>,
    pub due: Option<DueFilter>,
    pub search: Option<String>,
}

impl TaskFilter {
    /// Filter that accepts every task.
    #[must_use]
    pub fn all() -> Self {
        Self {
            status: StatusFilter::All,
            ..Self::default()
        }
    }

    /// Whether `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        self.matches_status(task)
            && self.matches_project(task)
            && self.priority.map_or(true, |p| task.priority == p)
            && self.matches_due(task, today)
            && self.matches_search(task)
    }

    fn matches_status(&self, task: &Task) -> bool {
        match self.status {
            StatusFilter::Open => task.status == Status::Open,
            StatusFilter::Completed => task.status == Status::Completed,
            StatusFilter::All => true,
        }
    }

    fn matches_project(&self, task: &Task) -> bool {
        self.project.as_deref().map_or(true, |wanted| {
            task.project
                .as_deref()
                .is_some_and(|p| p.eq_ignore_ascii_case(wanted))
        })
    }

    fn matches_due(&self, task: &Task, today: NaiveDate) -> bool {
        match self.due {
            None => true,
            Some(DueFilter::Overdue) => task.is_overdue(today),
            Some(DueFilter::Today) => task.is_due_on(today),
            Some(DueFilter::Upcoming) => task.is_upcoming(today),
            Some(DueFilter::None) => task.due_date.is_none(),
        }
    }

    fn matches_search(&self, task: &Task) -> bool {
        self.search.as_deref().map_or(true, |needle| {
            let needle = needle.to_lowercase();
            task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        })
    }
}

/// Keep the tasks that match `filter`.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task, today))
        .cloned()
        .collect()
}
