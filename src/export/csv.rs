//! CSV Export functionality
//!
//! Exports expenses and income to spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::LedgerResult;
use crate::models::{ExpenseEvent, IncomeEvent};

/// Export expenses to CSV in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[ExpenseEvent], writer: W) -> LedgerResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record([
        "ID",
        "Date",
        "Account",
        "Category",
        "Description",
        "Amount",
        "Payment Method",
    ])?;

    for expense in expenses {
        csv.write_record([
            expense.id().to_string(),
            expense.date().to_string(),
            expense.account().to_string(),
            expense.category().to_string(),
            expense.description().unwrap_or_default().to_string(),
            expense.amount().to_string(),
            expense.payment_method().to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export income events to CSV in the order given
pub fn export_income_csv<W: Write>(incomes: &[IncomeEvent], writer: W) -> LedgerResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(["ID", "Date", "Account", "Source", "Amount", "Payment Method"])?;

    for income in incomes {
        csv.write_record([
            income.id().to_string(),
            income.date().to_string(),
            income.account().to_string(),
            income.source().to_string(),
            income.amount().to_string(),
            income.payment_method().to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, ExpenseCategory, Money, PaymentMethod};
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses_quotes_fields() {
        let expense = ExpenseEvent::new(
            Account::new("Bank"),
            Money::from_cents(4550),
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            ExpenseCategory::new("Groceries"),
            Some("Milk, eggs".into()),
            PaymentMethod::DebitCard,
        )
        .unwrap();

        let mut output = Vec::new();
        export_expenses_csv(&[expense.clone()], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "ID,Date,Account,Category,Description,Amount,Payment Method"
        );
        assert_eq!(
            lines[1],
            format!(
                "{},2025-02-03,Bank,Groceries,\"Milk, eggs\",45.50,Debit Card",
                expense.id()
            )
        );
    }

    #[test]
    fn test_export_income() {
        let income = IncomeEvent::new(
            Account::new("Savings"),
            Money::from_units(12),
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            "Interest",
            PaymentMethod::Other,
        )
        .unwrap();

        let mut output = Vec::new();
        export_income_csv(&[income], &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert!(csv.contains("Savings,Interest,12.00,Other"));
    }

    #[test]
    fn test_export_empty() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(output.iter().filter(|b| **b == b'\n').count(), 1);
    }
}
