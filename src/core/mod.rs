//! Core abstractions for taskline.
//!
//! This module provides shared traits and utilities used across features.

pub mod datetime;
pub mod filter;
mod traits;

pub use datetime::{format_date, format_time, parse_date_arg};
pub use filter::{filter_tasks, DueFilter, StatusFilter, TaskFilter};
pub use traits::Schedulable;
