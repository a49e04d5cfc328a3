//! Natural language parsing for task entry.
//!
//! This module extracts structured fields from quick-entry text like:
//! - "Call mom tomorrow at 3pm urgent"
//! - "Submit report by friday"
//! - "Pay taxes March 17th, high priority"
//!
//! Dates, times and priorities are independent categories; within each one
//! the first pattern that matches wins.

mod date;
mod parser;
mod priority;
mod time;
mod title;

pub use date::next_weekday;
pub use parser::{parse_task, parse_task_at, MatchKind, MatchSpan, ParsedTask, TaskTextParser};
pub use priority::{Priority, PriorityOrder};
pub use title::collapse_whitespace;
