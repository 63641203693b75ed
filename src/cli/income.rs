//! Income CLI commands
//!
//! Implements CLI commands for recording and listing income.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_income_list;
use crate::error::LedgerResult;
use crate::services::{LedgerService, NewIncome, PeriodService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or, parse_method};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income into an account
    Add {
        /// Account name
        account: String,

        /// Amount (e.g., "5000" or "5000.00")
        amount: String,

        /// Where the money came from
        #[arg(short, long, default_value = "Other")]
        source: String,

        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Payment method (cash, debit, credit, bank, mobile, other)
        #[arg(short, long)]
        method: Option<String>,
    },

    /// List income, latest first
    List {
        /// Period (current, last, a date, YYYY-MM or START..END)
        #[arg(short, long)]
        period: Option<String>,

        /// List income from every period
        #[arg(long, conflicts_with = "period")]
        all: bool,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: IncomeCommands,
) -> LedgerResult<()> {
    let ledger = LedgerService::new(storage, settings, today)?;
    let period_service = PeriodService::new(settings, today);

    match cmd {
        IncomeCommands::Add {
            account,
            amount,
            source,
            date,
            method,
        } => {
            let income = ledger.record_income(NewIncome {
                account: &account,
                amount: parse_amount(&amount)?,
                date: parse_date_or(date.as_deref(), today)?,
                source: &source,
                payment_method: parse_method(method.as_deref())?,
            })?;

            println!(
                "Recorded income: {} into {} ({})",
                income.amount().format_with_symbol(&settings.currency_symbol),
                income.account(),
                income.source()
            );
            println!("  Date: {}", settings.format_date(income.date()));
            println!("  ID:   {}", income.id());
        }

        IncomeCommands::List { period, all } => {
            let period = if all {
                None
            } else {
                Some(period_service.parse_or_current(period.as_deref())?)
            };

            if let Some(period) = &period {
                println!("Income for {}", period_service.format_period_friendly(period));
            }
            let incomes = ledger.list_income(period.as_ref())?;
            println!("{}", format_income_list(&incomes, settings));
        }
    }

    Ok(())
}
