//! Shared traits for tasks.

use chrono::NaiveDate;

use crate::core::datetime::end_of_week;

/// Trait for items with a due date.
///
/// Every check takes `today` explicitly so results never depend on the
/// wall clock.
pub trait Schedulable {
    /// The due date, if any.
    fn due_date(&self) -> Option<NaiveDate>;

    /// Whether the item still needs doing.
    fn is_open(&self) -> bool;

    /// Open and due before `today`.
    fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_date().is_some_and(|d| d < today)
    }

    /// Due exactly on `today`.
    fn is_due_on(&self, today: NaiveDate) -> bool {
        self.due_date() == Some(today)
    }

    /// Due after `today` but within the coming week.
    fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.due_date()
            .is_some_and(|d| d > today && d <= end_of_week(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        due: Option<NaiveDate>,
        open: bool,
    }

    impl Schedulable for Item {
        fn due_date(&self) -> Option<NaiveDate> {
            self.due
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    #[test]
    fn test_overdue_only_when_open() {
        let today = date(15);
        assert!(Item { due: Some(date(10)), open: true }.is_overdue(today));
        assert!(!Item { due: Some(date(10)), open: false }.is_overdue(today));
        assert!(!Item { due: Some(date(15)), open: true }.is_overdue(today));
        assert!(!Item { due: None, open: true }.is_overdue(today));
    }

    #[test]
    fn test_upcoming_window() {
        let today = date(15);
        assert!(Item { due: Some(date(16)), open: true }.is_upcoming(today));
        assert!(Item { due: Some(date(21)), open: true }.is_upcoming(today));
        assert!(!Item { due: Some(date(22)), open: true }.is_upcoming(today));
        assert!(!Item { due: Some(date(15)), open: true }.is_upcoming(today));
    }
}
