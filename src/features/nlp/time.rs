//! Reminder time extraction.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::{Match, Regex};

static AT_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "at 3", "at 3pm", "at 3:30 pm", "at 15:45"
    Regex::new(r"(?i)\bat\s+(\d{1,2})(?::(\d{2}))?(?:\s*(am|pm))?\b")
        .unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// Named periods of the day, in the order they are tried.
static PERIOD_PATTERNS: Lazy<Vec<(Regex, u32)>> = Lazy::new(|| {
    [
        ("morning", 9),
        ("noon", 12),
        ("afternoon", 15),
        ("evening", 18),
        ("night", 20),
    ]
    .into_iter()
    .map(|(word, hour)| {
        let re = Regex::new(&format!(r"(?i)\b{word}\b"))
            .unwrap_or_else(|e| panic!("Invalid period regex for {word}: {e}"));
        (re, hour)
    })
    .collect()
});

/// Find the first time-of-day expression in `text`.
///
/// An explicit `at H[:MM][am|pm]` is preferred over named periods. An
/// explicit time that does not form a valid clock time is ignored.
pub(super) fn extract_time(text: &str) -> Option<(NaiveTime, Match<'_>)> {
    if let Some(caps) = AT_TIME_PATTERN.captures(text) {
        let hour = caps[1].parse::<u32>().ok();
        let minute = caps
            .get(2)
            .map_or(Some(0), |m| m.as_str().parse::<u32>().ok());
        let meridiem = caps.get(3).map(|m| m.as_str().to_lowercase());

        if let Some(time) = hour
            .zip(minute)
            .and_then(|(hour, minute)| clock_time(hour, minute, meridiem.as_deref()))
        {
            return caps.get(0).map(|m| (time, m));
        }
    }

    PERIOD_PATTERNS.iter().find_map(|(re, hour)| {
        let m = re.find(text)?;
        NaiveTime::from_hms_opt(*hour, 0, 0).map(|time| (time, m))
    })
}

/// Convert an hour/minute with optional `am`/`pm` to a clock time.
fn clock_time(hour: u32, minute: u32, meridiem: Option<&str>) -> Option<NaiveTime> {
    let hour = match meridiem {
        Some("pm") if hour < 12 => hour + 12,
        Some("am") if hour == 12 => 0,
        _ => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn extract(text: &str) -> Option<(NaiveTime, String)> {
        extract_time(text).map(|(t, m)| (t, m.as_str().to_string()))
    }

    #[test]
    fn test_at_pm() {
        assert_eq!(extract("call at 3pm"), Some((hm(15, 0), "at 3pm".into())));
        assert_eq!(extract("call at 3:30 PM"), Some((hm(15, 30), "at 3:30 PM".into())));
    }

    #[test]
    fn test_at_am() {
        assert_eq!(extract("at 9am"), Some((hm(9, 0), "at 9am".into())));
        assert_eq!(extract("at 10:15am"), Some((hm(10, 15), "at 10:15am".into())));
    }

    #[test]
    fn test_noon_and_midnight_edge() {
        assert_eq!(extract("at 12pm").map(|(t, _)| t), Some(hm(12, 0)));
        assert_eq!(extract("at 12am").map(|(t, _)| t), Some(hm(0, 0)));
    }

    #[test]
    fn test_at_without_meridiem() {
        assert_eq!(extract("at 7"), Some((hm(7, 0), "at 7".into())));
        assert_eq!(extract("at 18:45"), Some((hm(18, 45), "at 18:45".into())));
    }

    #[test]
    fn test_invalid_clock_falls_through() {
        assert_eq!(extract("at 25"), None);
        assert_eq!(extract("at 9:75 tonight"), None);
        assert_eq!(extract("at 27 in the morning").map(|(t, _)| t), Some(hm(9, 0)));
    }

    #[test]
    fn test_named_periods() {
        assert_eq!(extract("morning run"), Some((hm(9, 0), "morning".into())));
        assert_eq!(extract("lunch at noon"), Some((hm(12, 0), "noon".into())));
        assert_eq!(extract("afternoon tea").map(|(t, _)| t), Some(hm(15, 0)));
        assert_eq!(extract("Evening walk").map(|(t, _)| t), Some(hm(18, 0)));
        assert_eq!(extract("movie night").map(|(t, _)| t), Some(hm(20, 0)));
    }

    #[test]
    fn test_period_list_order_beats_position() {
        // "morning" is tried before "night" even though "night" comes first.
        assert_eq!(extract("night or morning"), Some((hm(9, 0), "morning".into())));
    }

    #[test]
    fn test_explicit_hour_beats_period() {
        assert_eq!(extract("evening at 7pm"), Some((hm(19, 0), "at 7pm".into())));
    }

    #[test]
    fn test_period_word_boundaries() {
        assert_eq!(extract("tonight"), None);
        assert_eq!(extract("nightly build"), None);
        assert_eq!(extract("attic"), None);
    }
}
