//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    settings: &Settings,
    writer: &mut W,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage, settings)?;

    writeln!(writer, "# pocket-ledger full export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export and check it
pub fn import_from_yaml(yaml_str: &str) -> LedgerResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| LedgerError::Import(e.to_string()))?;

    export.validate().map_err(LedgerError::Import)?;

    Ok(export)
}
