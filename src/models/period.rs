//! Reporting period representation
//!
//! A period is an inclusive calendar date range. Billing cycles produced by
//! `engine::cycle` are periods, as are custom ranges typed by the user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::parse_date;

/// Inclusive `[start, end]` date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawPeriod> for Period {
    type Error = PeriodParseError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Period::new(raw.start, raw.end)
    }
}

impl Period {
    /// Create a period, rejecting ranges whose end precedes their start
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodParseError> {
        if end < start {
            return Err(PeriodParseError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a period whose bounds are already known to be ordered
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "period bounds out of order");
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this period (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Parse a custom range in the form "2025-01-27..2025-02-26"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let start = parse_date(start).map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let end = parse_date(end).map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(start, end)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::EndBeforeStart { start, end } => {
                write!(f, "Period end {} is before its start {}", end, start)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = Period::new(d(2025, 1, 27), d(2025, 2, 26)).unwrap();
        assert!(period.contains(d(2025, 1, 27)));
        assert!(period.contains(d(2025, 2, 26)));
        assert!(!period.contains(d(2025, 1, 26)));
        assert!(!period.contains(d(2025, 2, 27)));
    }

    #[test]
    fn test_days() {
        let period = Period::new(d(2025, 1, 27), d(2025, 2, 26)).unwrap();
        assert_eq!(period.days(), 31);
        assert_eq!(Period::new(d(2025, 3, 1), d(2025, 3, 1)).unwrap().days(), 1);
    }

    #[test]
    fn test_rejects_inverted_range() {
        assert!(matches!(
            Period::new(d(2025, 2, 1), d(2025, 1, 1)),
            Err(PeriodParseError::EndBeforeStart { .. })
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let period = Period::parse("2024-12-27..2025-01-26").unwrap();
        assert_eq!(period.start(), d(2024, 12, 27));
        assert_eq!(period.end(), d(2025, 1, 26));
        assert_eq!(period.to_string(), "2024-12-27..2025-01-26");

        assert!(Period::parse("2025-01").is_err());
    }

    #[test]
    fn test_serialization_validates() {
        let period = Period::new(d(2025, 1, 27), d(2025, 2, 26)).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);

        let inverted = r#"{"start":"2025-02-26","end":"2025-01-27"}"#;
        assert!(serde_json::from_str::<Period>(inverted).is_err());
    }
}
