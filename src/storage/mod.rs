//! Storage layer for pocket-ledger
//!
//! JSON file storage with atomic writes, one repository per event kind, plus
//! the audit log.

pub mod events;
pub mod file_io;
pub mod init;

pub use events::{
    EventRepository, ExpenseRepository, IncomeRepository, LedgerRecord, TransferRepository,
};
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: LedgerPaths,
    pub income: IncomeRepository,
    pub expenses: ExpenseRepository,
    pub transfers: TransferRepository,
    audit: AuditLogger,
}

impl Storage {
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            income: IncomeRepository::new(paths.income_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            transfers: TransferRepository::new(paths.transfers_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), LedgerError> {
        self.income.load()?;
        self.expenses.load()?;
        self.transfers.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.income.save()?;
        self.expenses.save()?;
        self.transfers.save()?;
        Ok(())
    }

    /// Record the creation of `record` in the audit log
    pub fn log_create<T: LedgerRecord>(&self, record: &T) -> Result<(), LedgerError> {
        let entry = AuditEntry::create(T::ENTITY, record.record_id(), Some(record.label()), record);
        self.audit.log(&entry)
    }

    /// Record that `record` was refused, with the reason
    pub fn log_rejection<T: LedgerRecord>(
        &self,
        record: &T,
        reason: &LedgerError,
    ) -> Result<(), LedgerError> {
        let entry = AuditEntry::reject(
            T::ENTITY,
            record.record_id(),
            Some(record.label()),
            record,
            reason.to_string(),
        );
        self.audit.log(&entry)
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
