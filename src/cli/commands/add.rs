//! Quick add command implementation.
//!
//! This module implements the `taskline add` command for natural language task entry.

use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};
use colored::Colorize;

use crate::cli::args::{OutputFormat, QuickAddArgs};
use crate::config::Config;
use crate::core::{format_date, format_time, parse_date_arg};
use crate::error::TasklineError;
use crate::features::quick_entry::TaskDraft;
use crate::output::to_json;
use crate::tasks::{NewTask, TaskStore};

/// Build the task `args` describe, without saving it.
///
/// Flags are applied as manual edits, so they win over parsed values.
///
/// # Errors
///
/// Returns `InvalidInput` if `--due` is not a recognizable date or the
/// resulting title is empty.
pub fn draft_from_args(
    args: QuickAddArgs,
    config: &Config,
    now: NaiveDateTime,
) -> Result<NewTask, TasklineError> {
    let text = args.text();
    let parsed = config.parser.parser().parse(&text, now);

    let mut draft = TaskDraft::new();
    draft.apply_parsed(&parsed);

    if let Some(priority) = args.priority {
        draft.set_priority(Some(priority));
    }
    if let Some(due) = args.due {
        let date = parse_date_arg(&due, now.date())
            .ok_or_else(|| TasklineError::InvalidInput(format!("unrecognized due date '{due}'")))?;
        draft.set_due_date(Some(date));
    }
    draft.project = args.project;
    draft.description = args.description.unwrap_or_default();

    draft.to_new_task(config.tasks.default_priority)
}

/// Execute the quick add command.
///
/// # Errors
///
/// Returns an error if the text yields no title or the store rejects the task.
pub fn quick_add(
    store: &dyn TaskStore,
    args: QuickAddArgs,
    config: &Config,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let parse_only = args.parse_only;
    let new_task = draft_from_args(args, config, now)?;
    let today = now.date();

    if parse_only {
        return match format {
            OutputFormat::Json => to_json(&new_task),
            OutputFormat::Pretty => {
                let mut output = format!("{}\n", "Parsed Task (not created)".yellow().bold());
                write_details(&mut output, &new_task, today, true);
                Ok(output)
            },
        };
    }

    let task = store.create_task(&new_task)?;

    match format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => {
            let mut output = format!(
                "{} {} (ID: {})\n",
                "Created:".green().bold(),
                task.title,
                task.id.to_string().dimmed()
            );
            write_details(&mut output, &new_task, today, false);
            Ok(output)
        },
    }
}

fn write_details(output: &mut String, task: &NewTask, today: NaiveDate, with_title: bool) {
    if with_title {
        writeln!(output, "  {} {}", "Title:".cyan().bold(), task.title).ok();
    }
    if let Some(due) = task.due_date {
        writeln!(output, "  {} {}", "Due:".cyan(), format_date(due, today)).ok();
    }
    if let Some(reminder) = task.reminder_time {
        writeln!(output, "  {} {}", "Reminder:".magenta(), format_time(reminder.time())).ok();
    }
    writeln!(output, "  {} {}", "Priority:".red().bold(), task.priority).ok();
    if let Some(project) = &task.project {
        writeln!(output, "  {} {project}", "Project:".blue()).ok();
    }
    if !task.description.is_empty() {
        writeln!(output, "  {} {}", "Description:".dimmed(), task.description).ok();
    }
}
