//! Priority keyword extraction.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use serde::{Deserialize, Serialize};

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority ("whenever", "someday", "low priority").
    Low,
    /// Medium priority ("normal", "medium priority").
    Medium,
    /// High priority ("urgent", "asap", "important", "high priority").
    High,
}

impl Priority {
    /// Lowercase name used in storage and JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Ok(Self::Low),
            "medium" | "med" | "m" | "normal" => Ok(Self::Medium),
            "high" | "h" | "urgent" => Ok(Self::High),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}

/// Order in which the Medium and Low keyword groups are tried.
///
/// High is always tried first so that "urgent"/"asap" are never shadowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrder {
    /// High, then Medium, then Low.
    #[default]
    HighMediumLow,
    /// High, then Low, then Medium.
    HighLowMedium,
}

impl PriorityOrder {
    const fn tiers(self) -> [Priority; 3] {
        match self {
            Self::HighMediumLow => [Priority::High, Priority::Medium, Priority::Low],
            Self::HighLowMedium => [Priority::High, Priority::Low, Priority::Medium],
        }
    }
}

static HIGH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:urgent|high\s+priority|important|asap)\b")
        .unwrap_or_else(|e| panic!("Invalid high priority regex: {e}"))
});

static MEDIUM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:medium\s+priority|normal)\b")
        .unwrap_or_else(|e| panic!("Invalid medium priority regex: {e}"))
});

static LOW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:low\s+priority|whenever|not\s+urgent|someday)\b")
        .unwrap_or_else(|e| panic!("Invalid low priority regex: {e}"))
});

fn pattern_for(priority: Priority) -> &'static Regex {
    match priority {
        Priority::High => &HIGH_PATTERN,
        Priority::Medium => &MEDIUM_PATTERN,
        Priority::Low => &LOW_PATTERN,
    }
}

/// Find the first priority keyword in `text`.
///
/// Tiers are tried in `order`; inside a tier the leftmost keyword wins.
pub(super) fn extract_priority(text: &str, order: PriorityOrder) -> Option<(Priority, Match<'_>)> {
    order
        .tiers()
        .into_iter()
        .find_map(|priority| pattern_for(priority).find(text).map(|m| (priority, m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priority_of(text: &str) -> Option<Priority> {
        extract_priority(text, PriorityOrder::default()).map(|(p, _)| p)
    }

    #[test]
    fn test_high_keywords() {
        for text in ["urgent", "high priority", "important", "ASAP", "High  Priority"] {
            assert_eq!(priority_of(text), Some(Priority::High), "{text}");
        }
    }

    #[test]
    fn test_medium_and_low_keywords() {
        assert_eq!(priority_of("normal"), Some(Priority::Medium));
        assert_eq!(priority_of("medium priority"), Some(Priority::Medium));
        assert_eq!(priority_of("whenever"), Some(Priority::Low));
        assert_eq!(priority_of("someday"), Some(Priority::Low));
        assert_eq!(priority_of("low priority"), Some(Priority::Low));
    }

    #[test]
    fn test_leftmost_keyword_in_tier_wins() {
        let (_, m) = extract_priority("urgent call client asap", PriorityOrder::default()).unwrap();
        assert_eq!(m.as_str(), "urgent");
        assert_eq!(m.start(), 0);
    }

    #[test]
    fn test_high_shadows_not_urgent() {
        // High is tried first, so "urgent" inside "not urgent" fires.
        let (priority, m) = extract_priority("not urgent", PriorityOrder::default()).unwrap();
        assert_eq!(priority, Priority::High);
        assert_eq!(m.as_str(), "urgent");
    }

    #[test]
    fn test_tiebreak_order() {
        let text = "normal or whenever";
        assert_eq!(
            extract_priority(text, PriorityOrder::HighMediumLow).map(|(p, _)| p),
            Some(Priority::Medium)
        );
        assert_eq!(
            extract_priority(text, PriorityOrder::HighLowMedium).map(|(p, _)| p),
            Some(Priority::Low)
        );
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(priority_of("importantly"), None);
        assert_eq!(priority_of("abnormal"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("med".parse::<Priority>(), Ok(Priority::Medium));
        assert!("critical".parse::<Priority>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Priority::Low.to_string(), "low");
        assert_eq!(Priority::High.to_string(), "high");
    }
}
