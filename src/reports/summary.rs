//! Period Summary Report
//!
//! Renders a ledger summary as the period overview: combined totals, how much
//! of income was spent, the top category and the per-account table.

use std::io::Write;

use crate::display::{double_separator, format_account_table, format_percentage};
use crate::engine::LedgerSummary;
use crate::error::LedgerResult;
use crate::models::Money;

/// Summary report for one period
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub summary: LedgerSummary,
    /// Human-friendly period name, e.g. "Jan 27 - Feb 26, 2025"
    pub period_label: String,
    currency_symbol: String,
}

impl SummaryReport {
    pub fn new(
        summary: LedgerSummary,
        period_label: impl Into<String>,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            summary,
            period_label: period_label.into(),
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// One line describing spending against income
    pub fn spending_line(&self) -> String {
        let combined = &self.summary.combined;
        match (combined.overspend(), combined.expense_ratio()) {
            (Some(over), Some(ratio)) => format!(
                "Overspent by {} ({:.1}%)",
                self.money(over),
                ratio - 100.0
            ),
            (Some(over), None) => format!("Overspent by {} (no income)", self.money(over)),
            (None, Some(ratio)) => format!("{:.1}% of income spent", ratio),
            (None, None) => "No income or expenses yet".to_string(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let combined = &self.summary.combined;
        let mut output = String::new();

        output.push_str(&format!(
            "Ledger Summary: {} ({})\n",
            self.period_label, self.summary.period
        ));
        output.push_str(&double_separator(70));
        output.push('\n');
        output.push_str(&format!("Total Income:      {}\n", self.money(combined.income)));
        output.push_str(&format!("Total Expenses:    {}\n", self.money(combined.expenses)));
        output.push_str(&format!(
            "Cash Withdrawals:  {}\n",
            self.money(combined.cash_withdrawals)
        ));
        output.push_str(&format!("Net Balance:       {}\n", self.money(combined.balance)));
        output.push_str(&format!("Spending:          {}\n", self.spending_line()));

        match &self.summary.highest_spending_category {
            Some(top) => {
                let share = top
                    .amount
                    .percent_of(combined.expenses)
                    .map(|pct| format!(" ({} of expenses)", format_percentage(pct)))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "Top Category:      {} {}{}\n",
                    top.category,
                    self.money(top.amount),
                    share
                ));
            }
            None => output.push_str("Top Category:      none\n"),
        }

        output.push('\n');
        output.push_str(&format_account_table(&self.summary, &self.currency_symbol));
        output.push('\n');

        output
    }

    /// Export the report to CSV, one row per account plus a total row
    ///
    /// Amounts are plain decimals without the currency symbol.
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let start = self.summary.period.start().to_string();
        let end = self.summary.period.end().to_string();
        let ratio = |r: Option<f64>| r.map(|r| format!("{:.2}", r)).unwrap_or_default();
        let over = |o: Option<Money>| o.map(|o| o.to_string()).unwrap_or_default();

        csv.write_record([
            "Period Start",
            "Period End",
            "Account",
            "Income",
            "Expenses",
            "Cash Withdrawals",
            "Transfers In",
            "Transfers Out",
            "Balance",
            "Expense Ratio",
            "Overspend",
        ])?;

        for aggregate in self.summary.per_account.values() {
            csv.write_record([
                start.clone(),
                end.clone(),
                aggregate.account.to_string(),
                aggregate.income_total.to_string(),
                aggregate.expense_total.to_string(),
                aggregate.cash_withdrawal_total.to_string(),
                aggregate.transfers_in.to_string(),
                aggregate.transfers_out.to_string(),
                aggregate.balance.to_string(),
                ratio(aggregate.expense_ratio()),
                over(aggregate.overspend()),
            ])?;
        }

        let combined = &self.summary.combined;
        csv.write_record([
            start,
            end,
            "TOTAL".to_string(),
            combined.income.to_string(),
            combined.expenses.to_string(),
            combined.cash_withdrawals.to_string(),
            String::new(),
            String::new(),
            combined.balance.to_string(),
            ratio(combined.expense_ratio()),
            over(combined.overspend()),
        ])?;

        csv.flush()?;
        Ok(())
    }
}
