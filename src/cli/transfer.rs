//! CLI command handler for account transfers
//!
//! Moves money between two configured accounts. Transfers are not checked
//! against the source balance.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_transfer_list;
use crate::error::LedgerResult;
use crate::services::{LedgerService, NewTransfer, PeriodService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or};

/// Transfer subcommands
#[derive(Subcommand)]
pub enum TransferCommands {
    /// Move money from one account to another
    Add {
        /// Source account
        from: String,

        /// Destination account
        to: String,

        /// Amount to move
        amount: String,

        /// Transfer date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transfers, latest first
    List {
        /// Period (current, last, a date, YYYY-MM or START..END)
        #[arg(short, long)]
        period: Option<String>,

        /// List transfers from every period
        #[arg(long, conflicts_with = "period")]
        all: bool,
    },
}

/// Handle the transfer command
pub fn handle_transfer_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransferCommands,
) -> LedgerResult<()> {
    let ledger = LedgerService::new(storage, settings, today)?;

    match cmd {
        TransferCommands::Add {
            from,
            to,
            amount,
            date,
            note,
        } => {
            let transfer = ledger.record_transfer(NewTransfer {
                from_account: &from,
                to_account: &to,
                amount: parse_amount(&amount)?,
                date: parse_date_or(date.as_deref(), today)?,
                note,
            })?;

            println!("Transfer recorded:");
            println!("  From:   {}", transfer.from_account());
            println!("  To:     {}", transfer.to_account());
            println!(
                "  Amount: {}",
                transfer.amount().format_with_symbol(&settings.currency_symbol)
            );
            println!("  Date:   {}", settings.format_date(transfer.date()));
        }

        TransferCommands::List { period, all } => {
            let period_service = PeriodService::new(settings, today);
            let period = if all {
                None
            } else {
                Some(period_service.parse_or_current(period.as_deref())?)
            };

            if let Some(period) = &period {
                println!("Transfers for {}", period_service.format_period_friendly(period));
            }
            let transfers = ledger.list_transfers(period.as_ref())?;
            println!("{}", format_transfer_list(&transfers, settings));
        }
    }

    Ok(())
}
