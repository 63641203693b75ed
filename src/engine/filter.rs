//! Period filtering for dated records

use chrono::NaiveDate;

use crate::models::{ExpenseEvent, IncomeEvent, Period, TransferEvent};

/// Anything that happened on a calendar date
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for IncomeEvent {
    fn date(&self) -> NaiveDate {
        IncomeEvent::date(self)
    }
}

impl Dated for ExpenseEvent {
    fn date(&self) -> NaiveDate {
        ExpenseEvent::date(self)
    }
}

impl Dated for TransferEvent {
    fn date(&self) -> NaiveDate {
        TransferEvent::date(self)
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

/// Records dated within `period`, in their original relative order
pub fn in_period<'a, T, I>(period: &'a Period, records: I) -> impl Iterator<Item = &'a T> + 'a
where
    T: Dated + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: 'a,
{
    records
        .into_iter()
        .filter(move |record| period.contains(record.date()))
}

/// Collecting form of [`in_period`]
pub fn filter_period<'a, T: Dated>(period: &'a Period, records: &'a [T]) -> Vec<&'a T> {
    in_period(period, records).collect()
}
