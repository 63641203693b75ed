//! Audit logging for pocket-ledger
//!
//! Every accepted income, expense and transfer is appended to a line-delimited
//! JSON log, as is every expense refused for insufficient funds.
//!
//! - `AuditEntry`: one log line with timestamp, operation and a snapshot of
//!   the record.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
