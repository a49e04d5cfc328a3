use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::{DueFilter, StatusFilter, TaskFilter};
use crate::features::nlp::Priority;

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "A personal task manager with natural-language quick entry")]
#[command(long_about = "taskline - tasks from plain sentences

Type a task the way you would say it; taskline pulls out the due date,
reminder time and priority and keeps the rest as the title.

QUICK START:
  taskline add \"Call mom tomorrow at 3pm urgent\"
  taskline parse \"Submit report by friday\"      Preview without saving
  taskline list --due today                      What is due today
  taskline done 3                                Complete task 3
  taskline tui                                   Live quick-entry screen

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskline <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the task database
    #[arg(long, global = true, env = "TASKLINE_DB")]
    pub db: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show what quick entry would extract from some text
    ///
    /// Nothing is saved. Useful for checking how a phrase is understood.
    ///
    /// # Examples
    ///
    ///   taskline parse "Meeting at 3pm tomorrow"
    ///   taskline parse "3/17 urgent" --now 2026-04-02T09:00
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Add a task from natural language
    ///
    /// # Supported Patterns
    ///
    ///   Dates:     monday..sunday, tomorrow, today, next week,
    ///              Mar 17, March 17th, 3/17, 3/17/2027
    ///   Times:     at 3pm, at 9:30am, at 15:00,
    ///              morning, noon, afternoon, evening, night
    ///   Priority:  urgent, asap, important, high priority (high)
    ///              normal, medium priority (medium)
    ///              whenever, someday, low priority (low)
    ///
    /// # Examples
    ///
    ///   taskline add "Call mom tomorrow at 3pm urgent"
    ///   taskline add "Pay rent 5/1" --project Home
    ///   taskline add "Review PR" --priority high --due friday
    #[command(alias = "a")]
    Add(QuickAddArgs),

    /// List tasks
    ///
    /// Shows open tasks by default, in manual order.
    ///
    /// # Examples
    ///
    ///   taskline list
    ///   taskline list --due overdue
    ///   taskline list --project Home --status all
    ///   taskline ls -o json
    #[command(alias = "ls")]
    List(ListArgs),

    /// Mark a task completed
    Done {
        /// Task ID
        id: i64,
    },

    /// Mark a completed task open again
    Reopen {
        /// Task ID
        id: i64,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task ID
        id: i64,
    },

    /// Manage projects
    Project(ProjectArgs),

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   taskline completions zsh > ~/.zfunc/_taskline
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Open the quick-entry terminal UI
    Tui,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Text to parse
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Parse relative to this instant instead of now (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    #[arg(long, value_parser = parse_now_arg)]
    pub now: Option<NaiveDateTime>,
}

impl ParseArgs {
    /// The words joined back into one string.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args)]
pub struct QuickAddArgs {
    /// The task in natural language
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Longer description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Project to file the task under (created if missing)
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// Override the detected priority
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Override the detected due date (YYYY-MM-DD or natural language)
    #[arg(long)]
    pub due: Option<String>,

    /// Only parse and show what would be created, don't actually create
    #[arg(long)]
    pub parse_only: bool,
}

impl QuickAddArgs {
    /// The words joined back into one string.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args, Default)]
pub struct ListArgs {
    /// Which tasks to include by completion state
    #[arg(long, short = 's', value_enum, default_value = "open")]
    pub status: StatusFilter,

    /// Only tasks in this project
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// Only tasks with this priority
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Only tasks in this due-date bucket
    #[arg(long, value_enum)]
    pub due: Option<DueFilter>,

    /// Only tasks whose title or description contains this text
    #[arg(long, short = 'q')]
    pub search: Option<String>,
}

impl From<&ListArgs> for TaskFilter {
    fn from(args: &ListArgs) -> Self {
        Self {
            status: args.status,
            project: args.project.clone(),
            priority: args.priority,
            due: args.due,
            search: args.search.clone(),
        }
    }
}

#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommands,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a project
    Add {
        /// Project name
        name: String,
    },
    /// List projects with open task counts
    #[command(alias = "ls")]
    List,
}

/// Parse the `--now` override.
///
/// # Errors
///
/// Returns a message if the value is neither a date nor a date and time.
pub fn parse_now_arg(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| format!("expected YYYY-MM-DD or YYYY-MM-DDTHH:MM, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_now_arg() {
        let expected = NaiveDate::from_ymd_opt(2026, 4, 2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_now_arg("2026-04-02T09:30"), Ok(expected));
        assert_eq!(parse_now_arg("2026-04-02 09:30"), Ok(expected));
        assert_eq!(
            parse_now_arg("2026-04-02"),
            Ok(NaiveDate::from_ymd_opt(2026, 4, 2).unwrap().and_time(NaiveTime::MIN))
        );
        assert!(parse_now_arg("next tuesday").is_err());
    }

    #[test]
    fn test_cli_parse_command_joins_words() {
        let cli = Cli::try_parse_from(["taskline", "parse", "call", "mom", "tomorrow"]).unwrap();
        match cli.command {
            Commands::Parse(args) => assert_eq!(args.text(), "call mom tomorrow"),
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_cli_add_with_overrides() {
        let cli = Cli::try_parse_from([
            "taskline",
            "add",
            "Pay rent",
            "--project",
            "Home",
            "--priority",
            "high",
            "--due",
            "5/1",
        ])
        .unwrap();

        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.text(), "Pay rent");
                assert_eq!(args.project.as_deref(), Some("Home"));
                assert_eq!(args.priority, Some(Priority::High));
                assert_eq!(args.due.as_deref(), Some("5/1"));
                assert!(!args.parse_only);
            },
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_cli_add_alias() {
        let cli = Cli::try_parse_from(["taskline", "a", "buy milk"]).unwrap();
        assert!(matches!(cli.command, Commands::Add(_)));
    }

    #[test]
    fn test_cli_list_filters() {
        let cli = Cli::try_parse_from([
            "taskline", "ls", "--status", "all", "--due", "overdue", "-q", "tax",
        ])
        .unwrap();

        match cli.command {
            Commands::List(args) => {
                let filter = TaskFilter::from(&args);
                assert_eq!(filter.status, StatusFilter::All);
                assert_eq!(filter.due, Some(DueFilter::Overdue));
                assert_eq!(filter.search.as_deref(), Some("tax"));
            },
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["taskline", "list", "-o", "json", "-vv", "--db", "/tmp/t.db"])
            .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/t.db")));
    }

    #[test]
    fn test_cli_rejects_missing_text() {
        assert!(Cli::try_parse_from(["taskline", "add"]).is_err());
    }

    #[test]
    fn test_cli_project_subcommands() {
        let cli = Cli::try_parse_from(["taskline", "project", "add", "Garden"]).unwrap();
        match cli.command {
            Commands::Project(args) => {
                assert!(matches!(args.command, ProjectCommands::Add { ref name } if name == "Garden"));
            },
            _ => panic!("expected project command"),
        }
    }
}
