//! Core data models for pocket-ledger
//!
//! Accounts, categories, money, periods and the three kinds of ledger event:
//! income, expense and transfer.

pub mod account;
pub mod category;
pub mod date;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod record;
pub mod transfer;

pub use account::{Account, PaymentMethod};
pub use category::{Catalog, CatalogError, ExpenseCategory};
pub use date::{parse_date, DateParseError};
pub use expense::ExpenseEvent;
pub use ids::{ExpenseId, IncomeId, TransferId};
pub use income::IncomeEvent;
pub use money::{Money, MoneyParseError};
pub use period::{Period, PeriodParseError};
pub use record::{RecordError, MAX_RECORD_AMOUNT};
pub use transfer::TransferEvent;
