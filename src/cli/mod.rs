//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod expense;
pub mod export;
pub mod income;
pub mod insights;
pub mod period;
pub mod report;
pub mod transfer;

pub use audit::handle_audit_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use insights::handle_insights_command;
pub use period::handle_period_command;
pub use report::{handle_spending_command, handle_summary_command, OutputFormat};
pub use transfer::{handle_transfer_command, TransferCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Money, PaymentMethod};

/// Parse a positive amount argument
pub(crate) fn parse_amount(amount: &str) -> LedgerResult<Money> {
    let parsed = Money::parse(amount).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '100.00' or '100'. Error: {}",
            amount, e
        ))
    })?;

    if !parsed.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Amount must be greater than zero (got {})",
            parsed
        )));
    }
    Ok(parsed)
}

/// Parse an optional date argument, defaulting to `today`
pub(crate) fn parse_date_or(date: Option<&str>, today: NaiveDate) -> LedgerResult<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(today),
    }
}

/// Parse an optional payment method argument
pub(crate) fn parse_method(method: Option<&str>) -> LedgerResult<PaymentMethod> {
    match method {
        Some(s) => PaymentMethod::parse(s).ok_or_else(|| {
            let known: Vec<String> = PaymentMethod::all().iter().map(|m| m.to_string()).collect();
            LedgerError::Validation(format!(
                "Unknown payment method '{}'. Use one of: {}",
                s,
                known.join(", ")
            ))
        }),
        None => Ok(PaymentMethod::default()),
    }
}
