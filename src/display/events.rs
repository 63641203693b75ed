//! Event list formatting
//!
//! Renders income, expense and transfer lists as terminal tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::{ExpenseEvent, IncomeEvent, TransferEvent};

use super::report::truncate;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct TransferRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Apply the shared table style; `amount_column` is right-aligned
fn render(mut table: Table, amount_column: usize) -> String {
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(amount_column)).with(Alignment::right()));
    table.to_string()
}

/// Format income events as a table
pub fn format_income_list(incomes: &[IncomeEvent], settings: &Settings) -> String {
    if incomes.is_empty() {
        return "No income recorded.".to_string();
    }

    let rows = incomes.iter().map(|income| IncomeRow {
        date: settings.format_date(income.date()),
        account: income.account().to_string(),
        amount: income.amount().format_with_symbol(&settings.currency_symbol),
        source: truncate(income.source(), 30),
        method: income.payment_method().to_string(),
        id: income.id().to_string(),
    });

    render(Table::new(rows), 2)
}

/// Format expense events as a table, with category icons when configured
pub fn format_expense_list(expenses: &[ExpenseEvent], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|expense| {
        let category = match settings.icon_for(expense.category()) {
            Some(icon) => format!("{} {}", icon, expense.category()),
            None => expense.category().to_string(),
        };

        ExpenseRow {
            date: settings.format_date(expense.date()),
            account: expense.account().to_string(),
            amount: expense.amount().format_with_symbol(&settings.currency_symbol),
            category,
            description: truncate(expense.description().unwrap_or(""), 30),
            method: expense.payment_method().to_string(),
            id: expense.id().to_string(),
        }
    });

    let total: crate::models::Money = expenses.iter().map(|e| e.amount()).sum();
    format!(
        "{}\n{} expense(s), total {}",
        render(Table::new(rows), 2),
        expenses.len(),
        total.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format transfers as a table
pub fn format_transfer_list(transfers: &[TransferEvent], settings: &Settings) -> String {
    if transfers.is_empty() {
        return "No transfers recorded.".to_string();
    }

    let rows = transfers.iter().map(|transfer| TransferRow {
        date: settings.format_date(transfer.date()),
        from: transfer.from_account().to_string(),
        to: transfer.to_account().to_string(),
        amount: transfer.amount().format_with_symbol(&settings.currency_symbol),
        note: truncate(transfer.note().unwrap_or(""), 30),
        id: transfer.id().to_string(),
    });

    render(Table::new(rows), 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, ExpenseCategory, Money, PaymentMethod};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    #[test]
    fn test_empty_lists() {
        let settings = Settings::default();
        assert_eq!(format_income_list(&[], &settings), "No income recorded.");
        assert_eq!(format_expense_list(&[], &settings), "No expenses found.");
        assert_eq!(format_transfer_list(&[], &settings), "No transfers recorded.");
    }

    #[test]
    fn test_expense_list_shows_icon_and_total() {
        let mut settings = Settings::default();
        settings
            .category_icons
            .insert("Groceries".into(), "[G]".into());

        let expense = ExpenseEvent::new(
            Account::new("Bank"),
            Money::from_cents(123456),
            date(),
            ExpenseCategory::new("Groceries"),
            Some("Weekly shop".into()),
            PaymentMethod::DebitCard,
        )
        .unwrap();

        let output = format_expense_list(&[expense], &settings);
        assert!(output.contains("[G] Groceries"));
        assert!(output.contains("Nu. 1,234.56"));
        assert!(output.contains("Weekly shop"));
        assert!(output.contains("1 expense(s), total Nu. 1,234.56"));
    }

    #[test]
    fn test_transfer_list() {
        let settings = Settings::default();
        let transfer = TransferEvent::new(
            Account::new("Bank"),
            Account::new("Cash"),
            Money::from_units(200),
            date(),
            None,
        )
        .unwrap();

        let output = format_transfer_list(&[transfer], &settings);
        assert!(output.contains("From"));
        assert!(output.contains("Bank"));
        assert!(output.contains("Nu. 200.00"));
    }
}
