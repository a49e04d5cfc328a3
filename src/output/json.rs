//! JSON output formatting for taskline.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::json;

use crate::error::TasklineError;
use crate::features::nlp::{MatchSpan, ParsedTask, Priority};
use crate::features::quick_entry::{chips, Chip};
use crate::tasks::{Project, Task};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedOutput<'a> {
    input: &'a str,
    title: &'a str,
    due_date: Option<NaiveDateTime>,
    reminder_time: Option<NaiveDateTime>,
    priority: Option<Priority>,
    matches: &'a [MatchSpan],
    chips: Vec<Chip>,
}

/// Format a parse result as JSON, including match spans and chips.
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_parsed_json(
    input: &str,
    parsed: &ParsedTask,
    today: NaiveDate,
) -> Result<String, TasklineError> {
    let output = ParsedOutput {
        input,
        title: &parsed.title,
        due_date: parsed.due_date,
        reminder_time: parsed.reminder_time,
        priority: parsed.priority,
        matches: &parsed.matches,
        chips: chips(parsed, today),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], list_name: &str) -> Result<String, TasklineError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format projects as JSON
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn format_projects_json(projects: &[Project]) -> Result<String, TasklineError> {
    let output = json!({
        "count": projects.len(),
        "items": projects
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TasklineError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TasklineError> {
    Ok(serde_json::to_string_pretty(value)?)
}
