//! Reports module for pocket-ledger
//!
//! Period summaries and spending analysis built from engine summaries, with
//! terminal and CSV output.

pub mod spending;
pub mod summary;

pub use spending::{SpendingByCategory, SpendingReport};
pub use summary::SummaryReport;
