//! Natural language task parser.
//!
//! Parses strings like "Call mom tomorrow at 3pm urgent" into a cleaned
//! title, a due date, a reminder time and a priority.

use std::ops::Range;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::trace;

use super::date::extract_date;
use super::priority::{extract_priority, Priority, PriorityOrder};
use super::time::extract_time;
use super::title::{clean_extracted_title, collapse_whitespace};

/// Category of an extracted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// A due date expression.
    Date,
    /// A reminder time expression.
    Time,
    /// A priority keyword.
    Priority,
}

/// A substring consumed by a successful pattern match.
///
/// Offsets are byte offsets into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    /// The matched text, as typed.
    pub text: String,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Which field the match produced.
    pub kind: MatchKind,
}

impl MatchSpan {
    /// Byte range of the span in the original input.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Result of parsing a natural language task string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedTask {
    /// The input with every matched span removed.
    pub title: String,
    /// Due date at local midnight.
    pub due_date: Option<NaiveDateTime>,
    /// Reminder time, stamped against the parse day.
    pub reminder_time: Option<NaiveDateTime>,
    /// Priority, if a keyword was found.
    pub priority: Option<Priority>,
    /// Spans consumed from the input, in extraction order.
    pub matches: Vec<MatchSpan>,
}

impl ParsedTask {
    /// Whether any field besides the title was extracted.
    #[must_use]
    pub fn has_extractions(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Calendar day of the due date.
    #[must_use]
    pub fn due_day(&self) -> Option<NaiveDate> {
        self.due_date.map(|d| d.date())
    }

    /// Time of day of the reminder.
    #[must_use]
    pub fn reminder_clock(&self) -> Option<NaiveTime> {
        self.reminder_time.map(|t| t.time())
    }

    /// The span that produced a given field.
    #[must_use]
    pub fn span(&self, kind: MatchKind) -> Option<&MatchSpan> {
        self.matches.iter().find(|m| m.kind == kind)
    }
}

/// Extracts due date, reminder time and priority from free text.
///
/// Stateless apart from the Medium/Low precedence choice; the same
/// `(text, now)` always produces the same result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskTextParser {
    priority_order: PriorityOrder,
}

impl TaskTextParser {
    /// Create a parser with the given priority precedence.
    #[must_use]
    pub const fn new(priority_order: PriorityOrder) -> Self {
        Self { priority_order }
    }

    /// Parse `text` relative to `now`.
    #[must_use]
    pub fn parse(&self, text: &str, now: NaiveDateTime) -> ParsedTask {
        let today = now.date();
        let mut scan = Scan::new(text);
        let mut task = ParsedTask::default();

        if let Some((date, m)) = extract_date(&scan.remaining, today) {
            let range = m.range();
            task.due_date = Some(date.and_time(NaiveTime::MIN));
            scan.consume(range, MatchKind::Date);
        }

        if let Some((time, m)) = extract_time(&scan.remaining) {
            let range = m.range();
            task.reminder_time = Some(today.and_time(time));
            scan.consume(range, MatchKind::Time);
        }

        if let Some((priority, m)) = extract_priority(&scan.remaining, self.priority_order) {
            let range = m.range();
            task.priority = Some(priority);
            scan.consume(range, MatchKind::Priority);
        }

        task.title = if scan.consumed.is_empty() {
            collapse_whitespace(text)
        } else {
            clean_extracted_title(&scan.remaining)
        };
        task.matches = scan.matches;
        task
    }
}

/// Working copy of the input with consumed spans blanked out.
///
/// Blanking with spaces of equal byte length keeps every later match
/// offset valid against the original input. A later match may run across
/// a blanked span (`at friday 7pm`); only its unconsumed fragments are
/// recorded, so spans never overlap.
struct Scan<'a> {
    input: &'a str,
    remaining: String,
    consumed: Vec<Range<usize>>,
    matches: Vec<MatchSpan>,
}

impl<'a> Scan<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            remaining: input.to_string(),
            consumed: Vec::new(),
            matches: Vec::new(),
        }
    }

    fn consume(&mut self, range: Range<usize>, kind: MatchKind) {
        for fragment in self.fragments(range.clone()) {
            let text = self.input.get(fragment.clone()).unwrap_or_default().to_string();
            trace!(?kind, %text, start = fragment.start, end = fragment.end, "extracted span");
            self.matches.push(MatchSpan {
                text,
                start: fragment.start,
                end: fragment.end,
                kind,
            });
        }

        self.remaining.replace_range(range.clone(), &" ".repeat(range.len()));
        self.consumed.push(range);
    }

    /// Parts of `range` not already consumed, trimmed of whitespace.
    fn fragments(&self, range: Range<usize>) -> Vec<Range<usize>> {
        let mut taken: Vec<_> = self
            .consumed
            .iter()
            .filter(|c| c.start < range.end && range.start < c.end)
            .cloned()
            .collect();
        taken.sort_by_key(|c| c.start);

        let mut pieces = Vec::new();
        let mut cursor = range.start;
        for c in taken {
            if c.start > cursor {
                pieces.push(cursor..c.start);
            }
            cursor = cursor.max(c.end);
        }
        if cursor < range.end {
            pieces.push(cursor..range.end);
        }

        pieces
            .into_iter()
            .filter_map(|piece| self.trim(piece))
            .collect()
    }

    fn trim(&self, piece: Range<usize>) -> Option<Range<usize>> {
        let text = self.input.get(piece.clone())?;
        let leading = text.len() - text.trim_start().len();
        let trailing = text.len() - text.trim_end().len();
        let trimmed = (piece.start + leading)..(piece.end - trailing);
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Parse `text` relative to `now` with the default precedence.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskline::features::nlp::{parse_task_at, Priority};
///
/// let now = NaiveDate::from_ymd_opt(2026, 4, 15)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
///
/// let task = parse_task_at("Call mom tomorrow at 3pm urgent", now);
/// assert_eq!(task.title, "Call mom");
/// assert_eq!(task.due_day(), NaiveDate::from_ymd_opt(2026, 4, 16));
/// assert_eq!(task.priority, Some(Priority::High));
/// ```
#[must_use]
pub fn parse_task_at(text: &str, now: NaiveDateTime) -> ParsedTask {
    TaskTextParser::default().parse(text, now)
}

/// Parse `text` relative to the local wall clock.
#[must_use]
pub fn parse_task(text: &str) -> ParsedTask {
    parse_task_at(text, Local::now().naive_local())
}
