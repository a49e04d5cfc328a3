//! Task creation form state.
//!
//! A draft receives parser output on every debounced change. Fields the user
//! set by hand are remembered and never overwritten by a later parse.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::TasklineError;
use crate::features::nlp::{ParsedTask, Priority};
use crate::tasks::NewTask;

/// Fields the user edited directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Edited {
    priority: bool,
    due_date: bool,
    reminder_time: bool,
}

/// A task being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub reminder_time: Option<NaiveDateTime>,
    pub project: Option<String>,
    edited: Edited,
}

impl TaskDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a parse of the current input.
    ///
    /// The title always follows the parse. Date, reminder and priority are
    /// taken from the parse unless edited by hand; a parse that no longer
    /// finds a field clears it.
    pub fn apply_parsed(&mut self, parsed: &ParsedTask) {
        self.title.clone_from(&parsed.title);

        if !self.edited.due_date {
            self.due_date = parsed.due_day();
        }
        if !self.edited.reminder_time {
            self.reminder_time = parsed.reminder_time;
        }
        if !self.edited.priority {
            self.priority = parsed.priority;
        }
    }

    /// Set the priority by hand.
    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.priority = priority;
        self.edited.priority = true;
    }

    /// Set the due date by hand.
    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
        self.edited.due_date = true;
    }

    /// Set the reminder by hand.
    pub fn set_reminder_time(&mut self, reminder_time: Option<NaiveDateTime>) {
        self.reminder_time = reminder_time;
        self.edited.reminder_time = true;
    }

    /// Whether the user overrode the parsed priority.
    #[must_use]
    pub const fn priority_edited(&self) -> bool {
        self.edited.priority
    }

    /// Whether the user overrode the parsed due date.
    #[must_use]
    pub const fn due_date_edited(&self) -> bool {
        self.edited.due_date
    }

    /// Turn the draft into a creatable task.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the title is empty.
    pub fn to_new_task(&self, default_priority: Priority) -> Result<NewTask, TasklineError> {
        let mut task = NewTask::new(self.title.clone())?
            .with_priority(self.priority.unwrap_or(default_priority))
            .with_due_date(self.due_date)
            .with_project(self.project.clone());
        task.description = self.description.trim().to_string();
        task.reminder_time = self.reminder_time;
        Ok(task)
    }

    /// Start over, forgetting manual edits.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
