//! Event repositories
//!
//! One JSON file per event kind. Records keep their insertion order and are
//! re-validated on load, so a hand-edited file with a bad record fails fast
//! instead of skewing totals.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::audit::EntityType;
use crate::error::LedgerError;
use crate::models::{ExpenseEvent, IncomeEvent, RecordError, TransferEvent};

use super::file_io::{read_json, write_json_atomic};

/// A ledger event that can be stored and audited
pub trait LedgerRecord: Clone + Serialize + DeserializeOwned {
    const ENTITY: EntityType;

    fn record_id(&self) -> String;

    /// Short description for audit entries and messages
    fn label(&self) -> String;

    fn check(&self) -> Result<(), RecordError>;
}

impl LedgerRecord for IncomeEvent {
    const ENTITY: EntityType = EntityType::Income;

    fn record_id(&self) -> String {
        self.id().to_string()
    }

    fn label(&self) -> String {
        format!("{} {} {}", self.account(), self.amount(), self.source())
    }

    fn check(&self) -> Result<(), RecordError> {
        self.validate()
    }
}

impl LedgerRecord for ExpenseEvent {
    const ENTITY: EntityType = EntityType::Expense;

    fn record_id(&self) -> String {
        self.id().to_string()
    }

    fn label(&self) -> String {
        format!("{} {} {}", self.account(), self.amount(), self.category())
    }

    fn check(&self) -> Result<(), RecordError> {
        self.validate()
    }
}

impl LedgerRecord for TransferEvent {
    const ENTITY: EntityType = EntityType::Transfer;

    fn record_id(&self) -> String {
        self.id().to_string()
    }

    fn label(&self) -> String {
        format!(
            "{} -> {} {}",
            self.from_account(),
            self.to_account(),
            self.amount()
        )
    }

    fn check(&self) -> Result<(), RecordError> {
        self.validate()
    }
}

#[derive(Serialize, Deserialize)]
struct EventFile<T> {
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

impl<T> Default for EventFile<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

/// Repository for one kind of ledger event
pub struct EventRepository<T> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
}

pub type IncomeRepository = EventRepository<IncomeEvent>;
pub type ExpenseRepository = EventRepository<ExpenseEvent>;
pub type TransferRepository = EventRepository<TransferEvent>;

impl<T: LedgerRecord> EventRepository<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load records from disk, validating each one
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: EventFile<T> = read_json(&self.path)?;

        for record in &file_data.records {
            record.check().map_err(|e| {
                LedgerError::Storage(format!(
                    "{} {} in {} is invalid: {}",
                    T::ENTITY,
                    record.record_id(),
                    self.path.display(),
                    e
                ))
            })?;
        }

        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *records = file_data.records;

        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = EventFile {
            records: records.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Append a validated record (in memory; call `save` to persist)
    pub fn append(&self, record: T) -> Result<(), LedgerError> {
        record.check()?;

        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        records.push(record);

        Ok(())
    }

    /// All records in insertion order
    pub fn get_all(&self) -> Result<Vec<T>, LedgerError> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Find a record by its display id (e.g. "exp-1a2b3c4d")
    pub fn find(&self, id: &str) -> Result<Option<T>, LedgerError> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|r| r.record_id() == id.trim()).cloned())
    }

    pub fn count(&self) -> Result<usize, LedgerError> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, ExpenseCategory, Money, PaymentMethod};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    fn income(units: i64) -> IncomeEvent {
        IncomeEvent::new(
            Account::new("Bank"),
            Money::from_units(units),
            date(),
            "Salary",
            PaymentMethod::BankTransfer,
        )
        .unwrap()
    }

    #[test]
    fn test_append_and_get_all_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));

        repo.append(income(3)).unwrap();
        repo.append(income(1)).unwrap();
        repo.append(income(2)).unwrap();

        let amounts: Vec<i64> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|r| r.amount().units())
            .collect();
        assert_eq!(amounts, vec![3, 1, 2]);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let expense = ExpenseEvent::new(
            Account::new("Bank"),
            Money::from_units(300),
            date(),
            ExpenseCategory::new("Groceries"),
            Some("weekly".into()),
            PaymentMethod::DebitCard,
        )
        .unwrap();
        let id = expense.id().to_string();

        {
            let repo = ExpenseRepository::new(path.clone());
            repo.append(expense).unwrap();
            repo.save().unwrap();
        }

        {
            let repo = ExpenseRepository::new(path);
            repo.load().unwrap();
            let found = repo.find(&id).unwrap().unwrap();
            assert_eq!(found.category().name(), "Groceries");
            assert_eq!(found.description(), Some("weekly"));
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransferRepository::new(temp_dir.path().join("transfers.json"));
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_load_rejects_invalid_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transfers.json");

        let transfer = TransferEvent::new(
            Account::new("Bank"),
            Account::new("Cash"),
            Money::from_units(50),
            date(),
            None,
        )
        .unwrap();
        let repo = TransferRepository::new(path.clone());
        repo.append(transfer).unwrap();
        repo.save().unwrap();

        // Hand-edit the file so the transfer loops back to its source
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::write(&path, contents.replace("\"Cash\"", "\"Bank\"")).unwrap();

        let repo = TransferRepository::new(path);
        let err = repo.load().unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(err.to_string().contains("to itself"));
    }
}
