//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger events and summaries for
//! terminal display.

pub mod events;
pub mod report;
pub mod summary;

pub use events::{format_expense_list, format_income_list, format_transfer_list};
pub use report::{double_separator, format_bar, format_percentage, separator, truncate};
pub use summary::format_account_table;
