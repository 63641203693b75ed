//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{csv, json, yaml};
use crate::services::{ExpenseQuery, LedgerService, PeriodService};
use crate::storage::Storage;

/// Full export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export expenses to CSV, oldest first
    Expenses {
        /// Output file path
        output: PathBuf,

        /// Only this period (current, last, a date, YYYY-MM or START..END)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Export income to CSV, oldest first
    Income {
        /// Output file path
        output: PathBuf,

        /// Only this period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show export information without writing files
    Info,

    /// Read back a full export and check it against the ledger rules
    Check {
        /// Export file (.json, .yaml or .yml)
        input: PathBuf,
    },
}

fn create_output(output: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExportCommands,
) -> LedgerResult<()> {
    let ledger = LedgerService::new(storage, settings, today)?;
    let period_service = PeriodService::new(settings, today);
    let parse_period = |period: Option<String>| {
        period
            .as_deref()
            .map(|p| period_service.parse(p))
            .transpose()
    };

    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Json => json::export_full_json(storage, settings, &mut writer, pretty)?,
                ExportFormat::Yaml => yaml::export_full_yaml(storage, settings, &mut writer)?,
            }
            writer.flush()?;
            println!("Full ledger exported to: {}", output.display());
        }

        ExportCommands::Expenses { output, period } => {
            let query = ExpenseQuery {
                period: parse_period(period)?,
                descending: false,
                ..ExpenseQuery::default()
            };
            let expenses = ledger.list_expenses(&query)?;

            csv::export_expenses_csv(&expenses, create_output(&output)?)?;
            println!("Exported {} expenses to: {}", expenses.len(), output.display());
        }

        ExportCommands::Income { output, period } => {
            let period = parse_period(period)?;
            let mut incomes = ledger.list_income(period.as_ref())?;
            incomes.reverse();

            csv::export_income_csv(&incomes, create_output(&output)?)?;
            println!("Exported {} income records to: {}", incomes.len(), output.display());
        }

        ExportCommands::Info => {
            let export = json::FullExport::from_storage(storage, settings)?;
            let meta = &export.metadata;

            println!("Export Information");
            println!("==================");
            println!("Schema version: {}", export.schema_version);
            println!("Income:         {}", meta.income_count);
            println!("Expenses:       {}", meta.expense_count);
            println!("Transfers:      {}", meta.transfer_count);
            if let (Some(first), Some(last)) = (meta.earliest_event, meta.latest_event) {
                println!("Date range:     {} to {}", first, last);
            }
        }

        ExportCommands::Check { input } => {
            let contents = std::fs::read_to_string(&input).map_err(|e| {
                LedgerError::Import(format!("Failed to read {}: {}", input.display(), e))
            })?;
            let is_yaml = input
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
                });

            let export = if is_yaml {
                yaml::import_from_yaml(&contents)?
            } else {
                json::import_from_json(&contents)?
            };
            let meta = &export.metadata;

            println!("Export is valid: {}", input.display());
            println!("Exported at:    {}", export.exported_at);
            println!("Income:         {}", meta.income_count);
            println!("Expenses:       {}", meta.expense_count);
            println!("Transfers:      {}", meta.transfer_count);
        }
    }

    Ok(())
}
