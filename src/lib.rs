//! taskline - a personal task manager with natural-language quick entry
//!
//! Type "Call mom tomorrow at 3pm urgent" and get a task titled "Call mom",
//! due tomorrow, with a 3 PM reminder and high priority. The parser lives in
//! [`features::nlp`]; tasks are kept in a local `SQLite` database.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tasks;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TasklineError;
pub use features::nlp::{parse_task, parse_task_at, ParsedTask};
pub use storage::Database;
