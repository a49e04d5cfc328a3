//! Feature implementations for taskline.
//!
//! - Natural language parsing of task text
//! - Quick entry (debounced parsing, chips, draft form state)

pub mod nlp;
pub mod quick_entry;
