//! Calendar date parsing
//!
//! Records carry calendar dates only. Any time-of-day component in user or
//! file input is dropped here so period membership is decided by date alone.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or an RFC 3339 timestamp into a
/// calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.date());
        }
    }

    Err(DateParseError(s.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError(pub String);

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid date '{}'. Use YYYY-MM-DD", self.0)
    }
}

impl std::error::Error for DateParseError {}
