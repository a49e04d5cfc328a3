//! Quick entry: live parsing of a single input line.
//!
//! The parser is pure; this module owns everything around it that a live
//! input needs:
//! - a debounce timer so typing does not re-parse on every key
//! - chips describing the extracted fields
//! - a draft that merges parses without clobbering manual edits

mod chips;
mod debounce;
mod draft;

pub use chips::{chips, Chip};
pub use debounce::{Debouncer, MAX_DELAY, MIN_DELAY};
pub use draft::TaskDraft;
