//! Command implementations for taskline.
//!
//! Every command returns the text to print, so the binary only dispatches
//! and prints.

mod add;
mod parse;

pub use add::{draft_from_args, quick_add};
pub use parse::parse;

use chrono::NaiveDate;
use clap::CommandFactory;
use clap_complete::Shell;
use colored::Colorize;
use tracing::info;

use crate::cli::args::{Cli, ListArgs, OutputFormat, ProjectCommands};
use crate::core::{StatusFilter, TaskFilter};
use crate::error::TasklineError;
use crate::output::{format_projects, format_task, format_tasks, to_json};
use crate::tasks::TaskStore;

/// Execute list command
///
/// # Errors
///
/// Returns an error if the store query fails or output formatting fails.
pub fn list(
    store: &dyn TaskStore,
    args: &ListArgs,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let filter = TaskFilter::from(args);
    let tasks = store.list_tasks(&filter, today)?;
    let title = match filter.status {
        StatusFilter::Open => "Open",
        StatusFilter::Completed => "Completed",
        StatusFilter::All => "All Tasks",
    };
    format_tasks(&tasks, title, today, format)
}

/// Execute done command
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub fn done(
    store: &dyn TaskStore,
    id: i64,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let task = store.complete_task(id)?;
    info!(id, "completed task");
    match format {
        OutputFormat::Json => format_task(&task, today, format),
        OutputFormat::Pretty => Ok(format!("{} {}", "Completed:".green().bold(), task.title)),
    }
}

/// Execute reopen command
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub fn reopen(
    store: &dyn TaskStore,
    id: i64,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let task = store.reopen_task(id)?;
    info!(id, "reopened task");
    match format {
        OutputFormat::Json => format_task(&task, today, format),
        OutputFormat::Pretty => Ok(format!("{} {}", "Reopened:".yellow().bold(), task.title)),
    }
}

/// Execute delete command
///
/// # Errors
///
/// Returns `NotFound` for an unknown id.
pub fn delete(
    store: &dyn TaskStore,
    id: i64,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    let task = store.get_task(id)?;
    store.delete_task(id)?;
    info!(id, "deleted task");
    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "deleted": true, "id": id })),
        OutputFormat::Pretty => Ok(format!("{} {}", "Deleted:".red().bold(), task.title)),
    }
}

/// Execute project subcommands
///
/// # Errors
///
/// Returns `InvalidInput` for a duplicate or empty project name, or a store error.
pub fn project(
    store: &dyn TaskStore,
    cmd: ProjectCommands,
    format: OutputFormat,
) -> Result<String, TasklineError> {
    match cmd {
        ProjectCommands::Add { name } => {
            let project = store.create_project(&name)?;
            info!(id = project.id, name = %project.name, "created project");
            match format {
                OutputFormat::Json => to_json(&project),
                OutputFormat::Pretty => Ok(format!(
                    "{} {} (ID: {})",
                    "Created project:".green().bold(),
                    project.name,
                    project.id.to_string().dimmed()
                )),
            }
        },
        ProjectCommands::List => {
            let projects = store.list_projects()?;
            format_projects(&projects, format)
        },
    }
}

/// Generate a shell completion script.
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "taskline", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::Priority;
    use crate::tasks::{MockTaskStore, Project, Status, Task};
    use mockall::predicate::eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 15).unwrap()
    }

    fn make_task(id: i64, title: &str, status: Status) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: None,
            reminder_time: None,
            project: None,
            status,
            position: id,
            created_at: today().and_hms_opt(9, 0, 0).unwrap(),
            completed_at: None,
        }
    }

    #[test]
    fn test_list_passes_filter() {
        let mut store = MockTaskStore::new();
        store
            .expect_list_tasks()
            .withf(|f, _| f.status == StatusFilter::All && f.project.as_deref() == Some("Home"))
            .returning(|_, _| Ok(vec![make_task(1, "Fix sink", Status::Open)]));

        let args = ListArgs {
            status: StatusFilter::All,
            project: Some("Home".to_string()),
            ..ListArgs::default()
        };
        let output = list(&store, &args, today(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["list"], "All Tasks");
        assert_eq!(value["items"][0]["title"], "Fix sink");
    }

    #[test]
    fn test_done_reports_title() {
        colored::control::set_override(false);
        let mut store = MockTaskStore::new();
        store
            .expect_complete_task()
            .with(eq(3))
            .returning(|id| Ok(make_task(id, "Pay rent", Status::Completed)));

        let output = done(&store, 3, today(), OutputFormat::Pretty).unwrap();
        assert_eq!(output, "Completed: Pay rent");
    }

    #[test]
    fn test_done_unknown_id() {
        let mut store = MockTaskStore::new();
        store
            .expect_complete_task()
            .returning(|id| Err(TasklineError::task_not_found(id)));

        let err = done(&store, 99, today(), OutputFormat::Pretty).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_reopen_json() {
        let mut store = MockTaskStore::new();
        store
            .expect_reopen_task()
            .returning(|id| Ok(make_task(id, "Pay rent", Status::Open)));

        let output = reopen(&store, 3, today(), OutputFormat::Json).unwrap();
        assert!(output.contains("\"status\": \"open\""));
    }

    #[test]
    fn test_delete_looks_up_before_deleting() {
        let mut seq = mockall::Sequence::new();
        let mut store = MockTaskStore::new();
        store
            .expect_get_task()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(make_task(id, "Old task", Status::Open)));
        store
            .expect_delete_task()
            .with(eq(5))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let output = delete(&store, 5, OutputFormat::Json).unwrap();
        assert!(output.contains("\"deleted\": true"));
    }

    #[test]
    fn test_project_add_and_list() {
        let mut store = MockTaskStore::new();
        store.expect_create_project().returning(|name| {
            Ok(Project {
                id: 1,
                name: name.to_string(),
                created_at: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap().and_hms_opt(9, 0, 0).unwrap(),
                open_tasks: 0,
            })
        });
        store.expect_list_projects().returning(|| Ok(Vec::new()));

        let added = project(&store, ProjectCommands::Add { name: "Garden".to_string() }, OutputFormat::Json)
            .unwrap();
        assert!(added.contains("\"name\": \"Garden\""));

        let listed = project(&store, ProjectCommands::List, OutputFormat::Pretty).unwrap();
        assert!(listed.contains("No projects"));
    }

    #[test]
    fn test_completions_mention_binary() {
        let script = completions(Shell::Bash);
        assert!(script.contains("taskline"));
    }
}
