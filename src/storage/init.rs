//! Storage initialization
//!
//! First-run setup: settings file and empty event files.

use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::error::LedgerError;

use super::events::{ExpenseRepository, IncomeRepository, TransferRepository};

/// Initialize storage for a fresh installation
///
/// Writes `settings` only when no settings file exists yet and never
/// overwrites existing event files.
pub fn initialize_storage(paths: &LedgerPaths, settings: &Settings) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    // Refuse to write a catalog the engine could not use
    settings.catalog()?;

    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    if !paths.income_file().exists() {
        IncomeRepository::new(paths.income_file()).save()?;
    }
    if !paths.expenses_file().exists() {
        ExpenseRepository::new(paths.expenses_file()).save()?;
    }
    if !paths.transfers_file().exists() {
        TransferRepository::new(paths.transfers_file()).save()?;
    }

    Ok(())
}
