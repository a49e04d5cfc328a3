//! Title cleanup after keyword extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static EDGE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s,.;:]+|[\s,.;:]+$").unwrap_or_else(|e| panic!("Invalid punctuation regex: {e}"))
});

static LEADING_PREPOSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:to|for|on|at|by)\b\s*")
        .unwrap_or_else(|e| panic!("Invalid leading preposition regex: {e}"))
});

static TRAILING_PREPOSITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*\b(?:to|for|on|at|by)$")
        .unwrap_or_else(|e| panic!("Invalid trailing preposition regex: {e}"))
});

/// Collapse runs of whitespace to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a title whose keyword spans were removed.
///
/// Strips dangling punctuation and prepositions left behind at either end
/// ("Submit report by" becomes "Submit report"), repeating until stable.
#[must_use]
pub fn clean_extracted_title(text: &str) -> String {
    let mut title = collapse_whitespace(text);

    loop {
        let stripped = EDGE_PUNCTUATION.replace_all(&title, "");
        let stripped = LEADING_PREPOSITION.replace(&stripped, "");
        let stripped = TRAILING_PREPOSITION.replace(&stripped, "");
        let stripped = stripped.trim();

        if stripped == title {
            return title;
        }
        title = stripped.to_string();
    }
}
