use std::fmt::Write;

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use crate::core::datetime::days_until;
use crate::core::{format_date, format_time, Schedulable};
use crate::features::nlp::{MatchKind, ParsedTask, Priority};
use crate::features::quick_entry::chips;
use crate::tasks::{Project, Status, Task};

fn paint(text: &str, kind: MatchKind) -> ColoredString {
    match kind {
        MatchKind::Date => text.cyan().bold(),
        MatchKind::Time => text.magenta().bold(),
        MatchKind::Priority => text.red().bold(),
    }
}

fn priority_marker(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "!!!".red().bold(),
        Priority::Medium => "!! ".yellow(),
        Priority::Low => "!  ".dimmed(),
    }
}

/// Render `input` with each matched span colored by kind.
#[must_use]
pub fn highlight_input(input: &str, parsed: &ParsedTask) -> String {
    let mut spans: Vec<_> = parsed.matches.iter().collect();
    spans.sort_by_key(|m| m.start);

    let mut output = String::new();
    let mut cursor = 0;
    for span in spans {
        // Clip anything already painted.
        let start = span.start.max(cursor);
        let (Some(before), Some(matched)) = (input.get(cursor..start), input.get(start..span.end))
        else {
            continue;
        };
        if matched.is_empty() {
            continue;
        }
        output.push_str(before);
        output.push_str(&paint(matched, span.kind).underline().to_string());
        cursor = span.end;
    }
    output.push_str(input.get(cursor..).unwrap_or_default());
    output
}

/// Format a parse result: highlighted input, title and chips.
pub fn format_parsed_pretty(input: &str, parsed: &ParsedTask, today: NaiveDate) -> String {
    let mut output = format!("{}\n", highlight_input(input, parsed));
    output.push_str(&"─".repeat(40));
    output.push('\n');

    if parsed.title.is_empty() {
        writeln!(output, "  {} {}", "Title:".bold(), "(empty)".dimmed()).ok();
    } else {
        writeln!(output, "  {} {}", "Title:".bold(), parsed.title).ok();
    }

    let chips = chips(parsed, today);
    if chips.is_empty() {
        writeln!(output, "  {}", "Nothing recognized".dimmed()).ok();
    } else {
        let row: Vec<String> = chips
            .iter()
            .map(|c| paint(&format!("[{}]", c.label), c.kind).to_string())
            .collect();
        writeln!(output, "  {}", row.join(" ")).ok();
    }

    output
}

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[Task], title: &str, today: NaiveDate) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No items");
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = match task.status {
            Status::Open => "[ ]".white(),
            Status::Completed => "[x]".green(),
        };
        let name = match task.status {
            Status::Completed => task.title.strikethrough().to_string(),
            Status::Open => task.title.bold().to_string(),
        };

        let mut line = format!(
            "{} {} {} {}",
            format!("{:>4}", task.id).dimmed(),
            status_icon,
            priority_marker(task.priority),
            name
        );

        if let Some(project) = &task.project {
            write!(line, "  {}", project.dimmed()).ok();
        }
        if let Some(due) = task.due_date {
            let label = format_date(due, today);
            let label = if task.is_overdue(today) {
                label.red().bold()
            } else {
                label.yellow()
            };
            write!(line, "  {label}").ok();
        }
        if let Some(reminder) = task.reminder_time {
            write!(line, "  {}", format_time(reminder.time()).magenta()).ok();
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
pub fn format_task_pretty(task: &Task, today: NaiveDate) -> String {
    let status_icon = match task.status {
        Status::Open => "[ ]".white(),
        Status::Completed => "[x]".green(),
    };

    let mut output = format!("{} {}\n", status_icon, task.title.bold());
    writeln!(output, "  {}: {}", "ID".dimmed(), task.id).ok();
    writeln!(output, "  {}: {}", "Status".dimmed(), task.status).ok();
    writeln!(output, "  {}: {}", "Priority".dimmed(), task.priority).ok();

    if !task.description.is_empty() {
        writeln!(output, "  {}: {}", "Description".dimmed(), task.description).ok();
    }
    if let Some(project) = &task.project {
        writeln!(output, "  {}: {project}", "Project".dimmed()).ok();
    }
    if let Some(due) = task.due_date {
        let mut label = format_date(due, today);
        if task.is_overdue(today) {
            write!(label, " ({} days overdue)", -days_until(due, today)).ok();
        }
        writeln!(output, "  {}: {label}", "Due".dimmed()).ok();
    }
    if let Some(reminder) = task.reminder_time {
        writeln!(
            output,
            "  {}: {} {}",
            "Reminder".dimmed(),
            format_date(reminder.date(), today),
            format_time(reminder.time())
        )
        .ok();
    }
    writeln!(
        output,
        "  {}: {}",
        "Created".dimmed(),
        task.created_at.format("%Y-%m-%d %H:%M")
    )
    .ok();

    output
}

/// Format a list of projects as pretty output
pub fn format_projects_pretty(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "Projects (0)\n  No projects".to_string();
    }

    let mut output = format!("Projects ({})\n", projects.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for project in projects {
        writeln!(
            output,
            "▸ {}  {}",
            project.name.bold(),
            format!("{} open", project.open_tasks).dimmed()
        )
        .ok();
    }

    output
}
