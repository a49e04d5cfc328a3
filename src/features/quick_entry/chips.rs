//! Chips summarizing what the parser extracted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{format_date, format_time};
use crate::features::nlp::{MatchKind, ParsedTask};

/// One extracted field, ready to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub kind: MatchKind,
    pub label: String,
}

/// Build the chips for a parse result, in date, time, priority order.
#[must_use]
pub fn chips(parsed: &ParsedTask, today: NaiveDate) -> Vec<Chip> {
    let mut chips = Vec::new();

    if let Some(day) = parsed.due_day() {
        chips.push(Chip {
            kind: MatchKind::Date,
            label: format_date(day, today),
        });
    }
    if let Some(time) = parsed.reminder_clock() {
        chips.push(Chip {
            kind: MatchKind::Time,
            label: format_time(time),
        });
    }
    if let Some(priority) = parsed.priority {
        chips.push(Chip {
            kind: MatchKind::Priority,
            label: priority.to_string(),
        });
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::parse_task_at;

    #[test]
    fn test_chips_for_full_input() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap();
        let parsed = parse_task_at("Call mom tomorrow at 3pm urgent", today.and_hms_opt(8, 0, 0).unwrap());

        let labels: Vec<_> = chips(&parsed, today).into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Tomorrow", "3:00 PM", "high"]);
    }

    #[test]
    fn test_today_chip() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap();
        let parsed = parse_task_at("water plants today", today.and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(
            chips(&parsed, today),
            vec![Chip {
                kind: MatchKind::Date,
                label: "Today".to_string()
            }]
        );
    }

    #[test]
    fn test_no_chips() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap();
        let parsed = parse_task_at("water plants", today.and_hms_opt(8, 0, 0).unwrap());
        assert!(chips(&parsed, today).is_empty());
    }
}
