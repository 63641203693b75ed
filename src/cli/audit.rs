//! Audit CLI command
//!
//! Shows the most recent audit log entries.

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Handle the audit command
pub fn handle_audit_command(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
