//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{ExpenseEvent, IncomeEvent, TransferEvent};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Settings, including the account and category catalog
    pub settings: Settings,

    pub income: Vec<IncomeEvent>,
    pub expenses: Vec<ExpenseEvent>,
    pub transfers: Vec<TransferEvent>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,
    pub transfer_count: usize,

    /// Earliest event date across all kinds
    pub earliest_event: Option<NaiveDate>,

    /// Latest event date across all kinds
    pub latest_event: Option<NaiveDate>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage, settings: &Settings) -> LedgerResult<Self> {
        let income = storage.income.get_all()?;
        let expenses = storage.expenses.get_all()?;
        let transfers = storage.transfers.get_all()?;

        let dates: Vec<NaiveDate> = income
            .iter()
            .map(|i| i.date())
            .chain(expenses.iter().map(|e| e.date()))
            .chain(transfers.iter().map(|t| t.date()))
            .collect();

        let metadata = ExportMetadata {
            income_count: income.len(),
            expense_count: expenses.len(),
            transfer_count: transfers.len(),
            earliest_event: dates.iter().min().copied(),
            latest_event: dates.iter().max().copied(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: settings.clone(),
            income,
            expenses,
            transfers,
            metadata,
        })
    }

    /// Validate the export structure
    ///
    /// Every record must satisfy its own invariants and name accounts and
    /// categories from the exported catalog.
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let catalog = self.settings.catalog().map_err(|e| e.to_string())?;
        let known_account = |account: &crate::models::Account, id: &dyn std::fmt::Display| {
            if catalog.contains_account(account) {
                Ok(())
            } else {
                Err(format!("Record {} references unknown account {}", id, account))
            }
        };

        for income in &self.income {
            income.validate().map_err(|e| format!("Income {}: {}", income.id(), e))?;
            known_account(income.account(), &income.id())?;
        }

        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| format!("Expense {}: {}", expense.id(), e))?;
            known_account(expense.account(), &expense.id())?;
            if !catalog.contains_category(expense.category()) {
                return Err(format!(
                    "Expense {} references unknown category {}",
                    expense.id(),
                    expense.category()
                ));
            }
        }

        for transfer in &self.transfers {
            transfer
                .validate()
                .map_err(|e| format!("Transfer {}: {}", transfer.id(), e))?;
            known_account(transfer.from_account(), &transfer.id())?;
            known_account(transfer.to_account(), &transfer.id())?;
        }

        Ok(())
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export and check it
pub fn import_from_json(json_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| LedgerError::Import(e.to_string()))?;

    export.validate().map_err(LedgerError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use crate::models::{Account, ExpenseCategory, Money, PaymentMethod};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn populate(storage: &Storage) {
        storage
            .income
            .append(
                IncomeEvent::new(
                    Account::new("Bank"),
                    Money::from_units(1000),
                    d(1, 28),
                    "Salary",
                    PaymentMethod::BankTransfer,
                )
                .unwrap(),
            )
            .unwrap();
        storage
            .expenses
            .append(
                ExpenseEvent::new(
                    Account::new("Bank"),
                    Money::from_units(40),
                    d(2, 3),
                    ExpenseCategory::new("Groceries"),
                    None,
                    PaymentMethod::DebitCard,
                )
                .unwrap(),
            )
            .unwrap();
        storage
            .transfers
            .append(
                TransferEvent::new(
                    Account::new("Bank"),
                    Account::new("Cash"),
                    Money::from_units(100),
                    d(2, 1),
                    None,
                )
                .unwrap(),
            )
            .unwrap();
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        populate(&storage);

        let export = FullExport::from_storage(&storage, &Settings::default()).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.income_count, 1);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.transfer_count, 1);
        assert_eq!(export.metadata.earliest_event, Some(d(1, 28)));
        assert_eq!(export.metadata.latest_event, Some(d(2, 3)));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let (_temp_dir, storage) = create_test_storage();
        populate(&storage);

        let mut json_output = Vec::new();
        export_full_json(&storage, &Settings::default(), &mut json_output, true).unwrap();
        let json_string = String::from_utf8(json_output).unwrap();

        let imported = import_from_json(&json_string).unwrap();
        assert_eq!(imported.expenses.len(), 1);
        assert_eq!(imported.expenses[0].category().name(), "Groceries");
    }

    #[test]
    fn test_validate_rejects_unknown_account() {
        let (_temp_dir, storage) = create_test_storage();
        populate(&storage);

        let mut settings = Settings::default();
        settings.accounts = vec!["Bank".into()];
        let export = FullExport::from_storage(&storage, &settings).unwrap();

        let err = export.validate().unwrap_err();
        assert!(err.contains("unknown account Cash"));
    }

    #[test]
    fn test_empty_metadata() {
        let (_temp_dir, storage) = create_test_storage();
        let export = FullExport::from_storage(&storage, &Settings::default()).unwrap();

        assert_eq!(export.metadata.expense_count, 0);
        assert_eq!(export.metadata.earliest_event, None);
    }
}
