//! CLI commands for reports
//!
//! Period summary and spending breakdown, printed as text or CSV.

use chrono::NaiveDate;
use clap::ValueEnum;
use std::io;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::reports::{SpendingReport, SummaryReport};
use crate::services::{LedgerService, PeriodService};
use crate::storage::Storage;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// CSV on stdout
    Csv,
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    period: Option<&str>,
    output: OutputFormat,
) -> LedgerResult<()> {
    let ledger = LedgerService::new(storage, settings, today)?;
    let period_service = PeriodService::new(settings, today);

    let period = period_service.parse_or_current(period)?;
    let report = SummaryReport::new(
        ledger.summary(period)?,
        period_service.format_period_friendly(&period),
        settings.currency_symbol.clone(),
    );

    match output {
        OutputFormat::Text => print!("{}", report.format_terminal()),
        OutputFormat::Csv => report.export_csv(io::stdout().lock())?,
    }

    Ok(())
}

/// Handle the spending command
pub fn handle_spending_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    period: Option<&str>,
    top: Option<usize>,
    output: OutputFormat,
) -> LedgerResult<()> {
    let ledger = LedgerService::new(storage, settings, today)?;
    let period_service = PeriodService::new(settings, today);

    let period = period_service.parse_or_current(period)?;
    let mut report = SpendingReport::generate(&ledger.summary(period)?, settings);
    if let Some(top) = top {
        report.categories.truncate(top);
    }

    match output {
        OutputFormat::Text => print!("{}", report.format_terminal()),
        OutputFormat::Csv => report.export_csv(io::stdout().lock())?,
    }

    Ok(())
}
