//! Due date extraction.
//!
//! Patterns are tried in a fixed precedence and the first one that yields a
//! date wins:
//!
//! 1. weekday names (`friday`, `fri`, and a few `wednesday` misspellings)
//! 2. `tomorrow`
//! 3. `today`
//! 4. `next week`
//! 5. month name and day (`Mar 17`, `March 17th`)
//! 6. numeric `M/D` or `M/D/YYYY`

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::{Match, Regex};

static WEEKDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(monday|mon|tuesday|tue|wednesday|wed|wensday|wednsday|wedensday|wednesay|thursday|thu|friday|fri|saturday|sat|sunday|sun)\b",
    )
    .unwrap_or_else(|e| panic!("Invalid weekday regex: {e}"))
});

static TOMORROW_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btomorrow\b").unwrap_or_else(|e| panic!("Invalid tomorrow regex: {e}")));

static TODAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\btoday\b").unwrap_or_else(|e| panic!("Invalid today regex: {e}")));

static NEXT_WEEK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bnext\s+week\b").unwrap_or_else(|e| panic!("Invalid next week regex: {e}"))
});

static MONTH_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\s+(\d{1,2})(?:st|nd|rd|th)?\b",
    )
    .unwrap_or_else(|e| panic!("Invalid month-day regex: {e}"))
});

static NUMERIC_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}))?\b")
        .unwrap_or_else(|e| panic!("Invalid numeric date regex: {e}"))
});

/// Find the first due date expression in `text`, relative to `today`.
///
/// Returns the resolved date and the span that produced it.
pub(super) fn extract_date(text: &str, today: NaiveDate) -> Option<(NaiveDate, Match<'_>)> {
    if let Some(caps) = WEEKDAY_PATTERN.captures(text) {
        let m = caps.get(0)?;
        let target = weekday_from_name(&caps[1].to_lowercase())?;
        return Some((next_weekday(today, target), m));
    }

    if let Some(m) = TOMORROW_PATTERN.find(text) {
        return Some((today + Duration::days(1), m));
    }

    if let Some(m) = TODAY_PATTERN.find(text) {
        return Some((today, m));
    }

    if let Some(m) = NEXT_WEEK_PATTERN.find(text) {
        return Some((today + Duration::days(7), m));
    }

    if let Some(caps) = MONTH_DAY_PATTERN.captures(text) {
        let m = caps.get(0)?;
        let month = month_from_name(&caps[1].to_lowercase());
        let day = caps[2].parse::<u32>().ok();
        if let Some(date) = month
            .zip(day)
            .and_then(|(month, day)| resolve_month_day(today, month, day, None))
        {
            return Some((date, m));
        }
    }

    if let Some(caps) = NUMERIC_DATE_PATTERN.captures(text) {
        let m = caps.get(0)?;
        let month = caps[1].parse::<u32>().ok()?;
        let day = caps[2].parse::<u32>().ok()?;
        let year = caps.get(3).and_then(|y| y.as_str().parse::<i32>().ok());
        let date = resolve_month_day(today, month, day, year)?;
        return Some((date, m));
    }

    None
}

/// Next occurrence of `target` strictly after `today`.
///
/// Naming today's weekday means one week out, never today.
#[must_use]
pub fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = i64::from(today.weekday().num_days_from_sunday());
    let wanted = i64::from(target.num_days_from_sunday());
    let mut days = (wanted - current + 7) % 7;
    if days == 0 {
        days = 7;
    }
    today + Duration::days(days)
}

/// Resolve a month/day pair.
///
/// Without an explicit year the current year is used, rolling to next year
/// when `month` is already behind `today`'s month. Days past the end of the
/// month carry into the following month (`2/31` is early March).
fn resolve_month_day(today: NaiveDate, month: u32, day: u32, year: Option<i32>) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let year = year.unwrap_or_else(|| {
        if month < today.month() {
            today.year() + 1
        } else {
            today.year()
        }
    });

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_signed(Duration::days(i64::from(day) - 1))
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" | "wensday" | "wednsday" | "wedensday" | "wednesay" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    match name.get(..3)? {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}
