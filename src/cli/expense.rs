//! Expense CLI commands
//!
//! Recording an expense runs the balance check; a rejected expense is
//! reported as an error and nothing is stored.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{LedgerError, LedgerResult};
use crate::services::{ExpenseQuery, ExpenseSort, LedgerService, NewExpense, PeriodService};
use crate::storage::Storage;

use super::{parse_amount, parse_date_or, parse_method};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against an account
    Add {
        /// Account name
        account: String,

        /// Amount (e.g., "45.50")
        amount: String,

        /// Expense category
        #[arg(short, long)]
        category: String,

        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Payment method (cash, debit, credit, bank, mobile, other)
        #[arg(short, long)]
        method: Option<String>,
    },

    /// List expenses, latest first by default
    List {
        /// Only this account
        #[arg(short, long)]
        account: Option<String>,

        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only this period (current, last, a date, YYYY-MM or START..END)
        #[arg(short, long)]
        period: Option<String>,

        /// Sort key: date, amount or category
        #[arg(short, long, default_value = "date")]
        sort: String,

        /// Oldest, smallest or A-Z first
        #[arg(long)]
        asc: bool,

        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense in full
    Show {
        /// Expense id as listed (e.g. "exp-1a2b3c4d")
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let ledger = LedgerService::new(storage, settings, today)?;

    match cmd {
        ExpenseCommands::Add {
            account,
            amount,
            category,
            date,
            description,
            method,
        } => {
            let expense = ledger.record_expense(NewExpense {
                account: &account,
                amount: parse_amount(&amount)?,
                date: parse_date_or(date.as_deref(), today)?,
                category: &category,
                description,
                payment_method: parse_method(method.as_deref())?,
            })?;

            let remaining = ledger.active_summary()?.balance_of(expense.account());
            println!(
                "Recorded expense: {} from {} ({})",
                expense.amount().format_with_symbol(&settings.currency_symbol),
                expense.account(),
                expense.category()
            );
            println!("  Date:      {}", settings.format_date(expense.date()));
            println!(
                "  Remaining: {}",
                remaining.format_with_symbol(&settings.currency_symbol)
            );
            println!("  ID:        {}", expense.id());
        }

        ExpenseCommands::List {
            account,
            category,
            period,
            sort,
            asc,
            limit,
        } => {
            let sort = ExpenseSort::parse(&sort).ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Unknown sort key '{}'. Use date, amount or category",
                    sort
                ))
            })?;
            let period = period
                .as_deref()
                .map(|p| PeriodService::new(settings, today).parse(p))
                .transpose()?;

            let query = ExpenseQuery {
                account: account.as_deref().map(|a| ledger.resolve_account(a)).transpose()?,
                category: category
                    .as_deref()
                    .map(|c| ledger.resolve_category(c))
                    .transpose()?,
                period,
                sort,
                descending: !asc,
            };

            let mut expenses = ledger.list_expenses(&query)?;
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }
            println!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = ledger.find_expense(&id)?;

            println!("Expense:     {}", expense.id());
            println!("Date:        {}", settings.format_date(expense.date()));
            println!("Account:     {}", expense.account());
            println!(
                "Amount:      {}",
                expense.amount().format_with_symbol(&settings.currency_symbol)
            );
            println!("Category:    {}", expense.category());
            if let Some(description) = expense.description() {
                println!("Description: {}", description);
            }
            println!("Method:      {}", expense.payment_method());
            println!(
                "Recorded:    {}",
                expense.created_at().format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
    }

    Ok(())
}
