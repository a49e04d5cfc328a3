//! Output formatting for taskline.
//!
//! This module provides formatters for displaying tasks and parse results
//! in various formats.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::TasklineError;
use crate::features::nlp::ParsedTask;
use crate::tasks::{Project, Task};

pub use json::*;
pub use pretty::*;

/// Format a parse result based on output format
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_parsed(
    input: &str,
    parsed: &ParsedTask,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(input, parsed, today)),
        OutputFormat::Json => format_parsed_json(input, parsed, today),
    }
}

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, today)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_task(
    task: &Task,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, today)),
        OutputFormat::Json => to_json(task),
    }
}

/// Format projects based on output format
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_projects(projects: &[Project], format: OutputFormat) -> Result<String, TasklineError> {
    match format {
        OutputFormat::Pretty => Ok(format_projects_pretty(projects)),
        OutputFormat::Json => format_projects_json(projects),
    }
}
