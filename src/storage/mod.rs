//! Storage layer for taskline.
//!
//! This module provides SQLite-based persistence for tasks and projects.

mod database;
mod migrations;
mod tasks;

pub use database::Database;
