//! Billing cycle calculation
//!
//! The default cycle runs from the 27th of one month through the 26th of the
//! next. Every date belongs to exactly one cycle.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Period;

/// Day of month on which a billing cycle opens
pub const CYCLE_START_DAY: u32 = 27;

/// How "the current month" is cut for aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// 27th of one month through the 26th of the next
    #[default]
    BillingCycle,
    /// First through last day of the calendar month
    CalendarMonth,
}

impl CyclePolicy {
    /// The period containing `date`
    pub fn period_containing(&self, date: NaiveDate) -> Period {
        match self {
            Self::BillingCycle => billing_cycle(date),
            Self::CalendarMonth => calendar_month(date),
        }
    }

    /// The period ending the day before `period` starts
    ///
    /// At the start of the supported calendar there is nothing earlier, so
    /// the first period is its own predecessor.
    pub fn previous(&self, period: &Period) -> Period {
        match period.start().checked_sub_days(Days::new(1)) {
            Some(day) => self.period_containing(day),
            None => *period,
        }
    }

    /// The period starting the day after `period` ends
    ///
    /// The last period of the supported calendar is its own successor.
    pub fn next(&self, period: &Period) -> Period {
        match period.end().checked_add_days(Days::new(1)) {
            Some(day) => self.period_containing(day),
            None => *period,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "billing_cycle" | "billing" | "cycle" => Some(Self::BillingCycle),
            "calendar_month" | "calendar" | "month" => Some(Self::CalendarMonth),
            _ => None,
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BillingCycle => write!(f, "billing_cycle"),
            Self::CalendarMonth => write!(f, "calendar_month"),
        }
    }
}

/// The active billing period for `now` under the 27th-26th cycle
pub fn compute_period(now: NaiveDate) -> Period {
    CyclePolicy::BillingCycle.period_containing(now)
}

/// Billing cycle immediately before `period`
pub fn previous_period(period: &Period) -> Period {
    CyclePolicy::BillingCycle.previous(period)
}

/// Billing cycle immediately after `period`
pub fn next_period(period: &Period) -> Period {
    CyclePolicy::BillingCycle.next(period)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// `day` of the month starting at `month_start`; callers keep `day <= 28`
fn day_of(month_start: NaiveDate, day: u32) -> NaiveDate {
    month_start + Days::new(u64::from(day - 1))
}

/// Cycles cut off by the ends of `NaiveDate`'s range are truncated to
/// `NaiveDate::MIN` or `NaiveDate::MAX`
fn billing_cycle(now: NaiveDate) -> Period {
    let this_month = first_of_month(now);

    if now.day() >= CYCLE_START_DAY {
        let end = this_month
            .checked_add_months(Months::new(1))
            .map_or(NaiveDate::MAX, |close| day_of(close, CYCLE_START_DAY - 1));
        Period::from_ordered(day_of(this_month, CYCLE_START_DAY), end)
    } else {
        let start = this_month
            .checked_sub_months(Months::new(1))
            .map_or(NaiveDate::MIN, |open| day_of(open, CYCLE_START_DAY));
        Period::from_ordered(start, day_of(this_month, CYCLE_START_DAY - 1))
    }
}

fn calendar_month(now: NaiveDate) -> Period {
    let start = first_of_month(now);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(NaiveDate::MAX);
    Period::from_ordered(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_1_to_26_belong_to_cycle_opened_last_month() {
        for month in 1..=12 {
            for day in 1..=26 {
                let now = d(2025, month, day);
                let period = compute_period(now);
                let prev = first_of_month(now) - Months::new(1);
                assert_eq!(period.start(), d(prev.year(), prev.month(), 27), "{}", now);
                assert_eq!(period.end(), d(2025, month, 26), "{}", now);
            }
        }
    }

    #[test]
    fn test_days_from_27_open_a_new_cycle() {
        for month in 1..=12 {
            let last_day = (first_of_month(d(2024, month, 1)) + Months::new(1) - Days::new(1)).day();
            for day in 27..=last_day {
                let now = d(2024, month, day);
                let period = compute_period(now);
                let next = first_of_month(now) + Months::new(1);
                assert_eq!(period.start(), d(2024, month, 27), "{}", now);
                assert_eq!(period.end(), d(next.year(), next.month(), 26), "{}", now);
            }
        }
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let period = compute_period(d(2024, 12, 27));
        assert_eq!(period.start(), d(2024, 12, 27));
        assert_eq!(period.end(), d(2025, 1, 26));

        let period = compute_period(d(2025, 1, 5));
        assert_eq!(period.start(), d(2024, 12, 27));
        assert_eq!(period.end(), d(2025, 1, 26));
    }

    #[test]
    fn test_cycle_boundaries_are_inclusive() {
        let period = compute_period(d(2025, 2, 26));
        assert!(period.contains(d(2025, 1, 27)));
        assert!(period.contains(d(2025, 2, 26)));
        assert_eq!(compute_period(d(2025, 2, 27)).start(), d(2025, 2, 27));
    }

    #[test]
    fn test_previous_and_next() {
        let period = compute_period(d(2025, 1, 10));
        let prev = previous_period(&period);
        assert_eq!(prev.start(), d(2024, 11, 27));
        assert_eq!(prev.end(), d(2024, 12, 26));

        let next = next_period(&period);
        assert_eq!(next.start(), d(2025, 1, 27));
        assert_eq!(next.end(), d(2025, 2, 26));
        assert_eq!(previous_period(&next), period);
    }

    #[test]
    fn test_cycles_at_calendar_limits_are_truncated() {
        let last = compute_period(NaiveDate::MAX);
        assert_eq!(last.start(), d(NaiveDate::MAX.year(), 12, 27));
        assert_eq!(last.end(), NaiveDate::MAX);
        assert_eq!(next_period(&last), last);

        let first = compute_period(NaiveDate::MIN);
        assert_eq!(first.start(), NaiveDate::MIN);
        assert_eq!(first.end(), d(NaiveDate::MIN.year(), 1, 26));
        assert_eq!(previous_period(&first), first);

        let month = CyclePolicy::CalendarMonth.period_containing(NaiveDate::MAX);
        assert_eq!(month.start(), d(NaiveDate::MAX.year(), 12, 1));
        assert_eq!(month.end(), NaiveDate::MAX);
    }

    #[test]
    fn test_calendar_month_policy() {
        let policy = CyclePolicy::CalendarMonth;
        let period = policy.period_containing(d(2024, 2, 27));
        assert_eq!(period.start(), d(2024, 2, 1));
        assert_eq!(period.end(), d(2024, 2, 29));

        let next = policy.next(&period);
        assert_eq!(next.start(), d(2024, 3, 1));
        assert_eq!(next.end(), d(2024, 3, 31));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(CyclePolicy::parse("billing-cycle"), Some(CyclePolicy::BillingCycle));
        assert_eq!(CyclePolicy::parse("Calendar Month"), Some(CyclePolicy::CalendarMonth));
        assert_eq!(CyclePolicy::parse("weekly"), None);
        assert_eq!(CyclePolicy::default(), CyclePolicy::BillingCycle);
    }
}
