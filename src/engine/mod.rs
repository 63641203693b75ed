//! Ledger aggregation and balance validation
//!
//! Pure functions over caller-supplied records. Data flows one way: the
//! cycle calculator picks a period, the filter selects records inside it, the
//! aggregator totals them and the validator checks a proposed expense against
//! those totals. Nothing here performs I/O or keeps state between calls.

pub mod aggregate;
pub mod cycle;
pub mod filter;
pub mod validate;

pub use aggregate::{AccountAggregate, Aggregator, CategorySpend, CombinedTotals, LedgerSummary};
pub use cycle::{compute_period, next_period, previous_period, CyclePolicy, CYCLE_START_DAY};
pub use filter::{filter_period, in_period, Dated};
pub use validate::{validate_expense, Rejection, Verdict};
