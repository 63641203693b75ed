//! Service layer for pocket-ledger
//!
//! Business logic on top of the storage layer: resolving names against the
//! catalog, running the balance check and building reports and requests from
//! engine summaries.

pub mod insights;
pub mod ledger;
pub mod period;

pub use insights::{SavingsInsightsRequest, SavingsSnapshot};
pub use ledger::{ExpenseQuery, ExpenseSort, LedgerService, NewExpense, NewIncome, NewTransfer};
pub use period::PeriodService;
