//! Period service
//!
//! Resolves user period references ("current", "last", a date, a range)
//! against the configured cycle policy.

use chrono::{Datelike, NaiveDate};

use crate::config::settings::Settings;
use crate::engine::CyclePolicy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Period};

/// Service for period resolution and navigation
pub struct PeriodService {
    policy: CyclePolicy,
    today: NaiveDate,
}

impl PeriodService {
    pub fn new(settings: &Settings, today: NaiveDate) -> Self {
        Self {
            policy: settings.cycle_policy,
            today,
        }
    }

    pub fn policy(&self) -> CyclePolicy {
        self.policy
    }

    /// The active period, the one containing today
    pub fn current_period(&self) -> Period {
        self.policy.period_containing(self.today)
    }

    pub fn period_for_date(&self, date: NaiveDate) -> Period {
        self.policy.period_containing(date)
    }

    pub fn next_period(&self, period: &Period) -> Period {
        self.policy.next(period)
    }

    pub fn previous_period(&self, period: &Period) -> Period {
        self.policy.previous(period)
    }

    /// Parse a period string or get the current period
    pub fn parse_or_current(&self, period_str: Option<&str>) -> LedgerResult<Period> {
        match period_str {
            Some(s) => self.parse(s),
            None => Ok(self.current_period()),
        }
    }

    /// Parse a period reference
    ///
    /// Formats supported:
    /// - Relative: "current", "now", "this", "last", "previous", "prev", "next"
    /// - A date: "2025-02-03" (the period containing it)
    /// - A month: "2025-02" (the period containing the 1st of that month)
    /// - Date range: "2025-01-01..2025-01-14"
    pub fn parse(&self, s: &str) -> LedgerResult<Period> {
        let s_lower = s.trim().to_lowercase();

        match s_lower.as_str() {
            "current" | "now" | "this" => return Ok(self.current_period()),
            "last" | "previous" | "prev" => {
                return Ok(self.previous_period(&self.current_period()))
            }
            "next" => return Ok(self.next_period(&self.current_period())),
            _ => {}
        }

        if s_lower.contains("..") {
            return Ok(Period::parse(&s_lower)?);
        }

        if let Ok(date) = parse_date(&s_lower) {
            return Ok(self.period_for_date(date));
        }

        if let Some(first) = parse_month(&s_lower) {
            return Ok(self.period_for_date(first));
        }

        Err(LedgerError::Validation(format!(
            "Invalid period: {}. Use current, last, next, YYYY-MM, YYYY-MM-DD or START..END",
            s.trim()
        )))
    }

    /// The `count` periods ending with the current one, oldest first
    pub fn recent_periods(&self, count: usize) -> Vec<Period> {
        let mut periods = Vec::with_capacity(count);
        let mut current = self.current_period();

        for _ in 0..count {
            periods.push(current);
            current = self.previous_period(&current);
        }

        periods.reverse();
        periods
    }

    /// Format a period in a human-friendly way
    pub fn format_period_friendly(&self, period: &Period) -> String {
        let (start, end) = (period.start(), period.end());

        let whole_month = start.day() == 1
            && CyclePolicy::CalendarMonth.period_containing(start).end() == end;
        if whole_month {
            return start.format("%B %Y").to_string();
        }

        if start.year() == end.year() {
            format!("{} - {}", start.format("%b %d"), end.format("%b %d, %Y"))
        } else {
            format!("{} - {}", start.format("%b %d, %Y"), end.format("%b %d, %Y"))
        }
    }

    pub fn is_current(&self, period: &Period) -> bool {
        *period == self.current_period()
    }
}

fn parse_month(s: &str) -> Option<NaiveDate> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || month.is_empty() || month.len() > 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}
