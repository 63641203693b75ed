//! Summary display formatting
//!
//! Per-account table for a period summary.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::engine::{AccountAggregate, LedgerSummary};

use super::report::format_percentage;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Cash W/D")]
    cash_withdrawals: String,
    #[tabled(rename = "Transfers")]
    transfers: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Spent")]
    spent: String,
}

impl AccountRow {
    fn new(aggregate: &AccountAggregate, symbol: &str) -> Self {
        let spent = match (aggregate.overspend(), aggregate.expense_ratio()) {
            (Some(over), _) => format!("over by {}", over.format_with_symbol(symbol)),
            (None, Some(ratio)) => format_percentage(ratio),
            (None, None) => "-".to_string(),
        };

        Self {
            account: aggregate.account.to_string(),
            income: aggregate.income_total.format_with_symbol(symbol),
            expenses: aggregate.expense_total.format_with_symbol(symbol),
            cash_withdrawals: aggregate.cash_withdrawal_total.format_with_symbol(symbol),
            transfers: aggregate.net_transfers().format_with_symbol(symbol),
            balance: aggregate.balance.format_with_symbol(symbol),
            spent,
        }
    }
}

/// Format every account touched in the period as a table
///
/// Active accounts come first in the order they appeared, followed by
/// accounts that only moved money through transfers.
pub fn format_account_table(summary: &LedgerSummary, symbol: &str) -> String {
    if !summary.has_activity() {
        return "No activity in this period.".to_string();
    }

    let transfer_only = summary
        .per_account
        .values()
        .filter(|aggregate| !summary.active_accounts.contains(&aggregate.account));

    let rows: Vec<AccountRow> = summary
        .active_aggregates()
        .chain(transfer_only)
        .map(|aggregate| AccountRow::new(aggregate, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..6)).with(Alignment::right()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compute_period, Aggregator};
    use crate::models::{
        Account, Catalog, ExpenseCategory, ExpenseEvent, IncomeEvent, Money, PaymentMethod,
        TransferEvent,
    };
    use chrono::NaiveDate;

    #[test]
    fn test_account_table() {
        let catalog = Catalog::new(["Bank", "Savings"], ["Rent", "Cash Withdrawals"], "Cash Withdrawals")
            .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let income = IncomeEvent::new(
            Account::new("Bank"),
            Money::from_units(100),
            date,
            "Salary",
            PaymentMethod::BankTransfer,
        )
        .unwrap();
        let expense = ExpenseEvent::new(
            Account::new("Bank"),
            Money::from_units(150),
            date,
            ExpenseCategory::new("Rent"),
            None,
            PaymentMethod::Cash,
        )
        .unwrap();
        let transfer = TransferEvent::new(
            Account::new("Savings"),
            Account::new("Bank"),
            Money::from_units(80),
            date,
            None,
        )
        .unwrap();

        let summary = Aggregator::new(&catalog).aggregate(
            compute_period(date),
            &[income],
            &[expense],
            &[transfer],
        );
        let output = format_account_table(&summary, "$");

        assert!(output.contains("over by $50.00"));
        assert!(output.contains("Savings"));
        assert!(output.contains("-$80.00"));
        let bank = output.find("Bank").unwrap();
        let savings = output.find("Savings").unwrap();
        assert!(bank < savings);
    }

    #[test]
    fn test_no_activity() {
        let catalog = Catalog::new(["Bank"], ["Cash Withdrawals"], "Cash Withdrawals").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let summary = Aggregator::new(&catalog).aggregate(compute_period(date), &[], &[], &[]);
        assert_eq!(format_account_table(&summary, "$"), "No activity in this period.");
    }
}
