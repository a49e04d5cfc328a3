//! Date and time display helpers.
//!
//! Chips in the quick-entry screen and the CLI render parser output through
//! these, so "today" and "tomorrow" read as words rather than dates.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::features::nlp::parse_task_at;

/// Format a date relative to `today`.
///
/// Returns `"Today"`, `"Tomorrow"` or `"Yesterday"` when they apply,
/// `"Mar 17"` within the same year, and `"Mar 17, 2027"` otherwise.
#[must_use]
pub fn format_date(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ if date.year() == today.year() => date.format("%b %-d").to_string(),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}

/// Format a time of day on a 12-hour clock, e.g. `"3:00 PM"`.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Parse a date given on the command line.
///
/// Accepts ISO `YYYY-MM-DD` or any date phrase quick entry understands
/// ("friday", "tomorrow", "3/17").
#[must_use]
pub fn parse_date_arg(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    let parsed = parse_task_at(input, today.and_time(NaiveTime::MIN));
    // Only accept the phrase if it was a date and nothing else.
    if parsed.title.is_empty() {
        parsed.due_day()
    } else {
        None
    }
}

/// Days from `today` until `date` (negative when in the past).
#[must_use]
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// The last day of the seven-day window starting at `today`.
#[must_use]
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    today + Duration::days(6)
}
