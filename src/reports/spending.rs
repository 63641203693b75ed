//! Spending Report
//!
//! Spending by category for one period, largest first.

use std::io::Write;

use crate::config::settings::Settings;
use crate::display::{format_bar, format_percentage, separator};
use crate::engine::LedgerSummary;
use crate::error::LedgerResult;
use crate::models::{ExpenseCategory, Money, Period};

/// Spending in a single category
#[derive(Debug, Clone)]
pub struct SpendingByCategory {
    pub category: ExpenseCategory,
    pub icon: Option<String>,
    pub total_spending: Money,
    /// Share of total spending, in percent
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub period: Period,
    /// Categories ordered by spending, largest first; ties keep first-seen order
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_income: Money,
    pub cash_withdrawals: Money,
    currency_symbol: String,
}

impl SpendingReport {
    /// Build a spending report from a period summary
    pub fn generate(summary: &LedgerSummary, settings: &Settings) -> Self {
        let total_spending = summary.combined.expenses;

        let mut categories: Vec<SpendingByCategory> = summary
            .spending_by_category
            .iter()
            .map(|spend| SpendingByCategory {
                category: spend.category.clone(),
                icon: settings.icon_for(&spend.category).map(str::to_string),
                total_spending: spend.amount,
                percentage: spend.amount.percent_of(total_spending).unwrap_or(0.0),
            })
            .collect();

        // Stable, so equal amounts stay in first-seen order
        categories.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));

        Self {
            period: summary.period,
            categories,
            total_spending,
            total_income: summary.combined.income,
            cash_withdrawals: summary.combined.cash_withdrawals,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let symbol = &self.currency_symbol;
        let mut output = String::new();

        output.push_str(&format!(
            "Spending Report: {} to {}\n",
            self.period.start(),
            self.period.end()
        ));
        output.push_str(&separator(70));
        output.push('\n');
        output.push_str(&format!(
            "Total Spending: {}\n",
            self.total_spending.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Income: {}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Cash Withdrawals: {}\n\n",
            self.cash_withdrawals.format_with_symbol(symbol)
        ));

        if self.categories.is_empty() {
            output.push_str("No spending in this period.\n");
            return output;
        }

        let max = self
            .categories
            .first()
            .map(|c| c.total_spending.cents() as f64)
            .unwrap_or(0.0);

        for category in &self.categories {
            let name = match &category.icon {
                Some(icon) => format!("{} {}", icon, category.category),
                None => category.category.to_string(),
            };
            output.push_str(&format!(
                "{:<30} {:>16} {:>6}  {}\n",
                name,
                category.total_spending.format_with_symbol(symbol),
                format_percentage(category.percentage),
                format_bar(category.total_spending.cents() as f64, max, 20)
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let start = self.period.start().to_string();
        let end = self.period.end().to_string();

        csv.write_record(["Start Date", "End Date", "Category", "Amount", "Percentage"])?;
        for category in &self.categories {
            csv.write_record([
                start.clone(),
                end.clone(),
                category.category.to_string(),
                category.total_spending.to_string(),
                format!("{:.2}", category.percentage),
            ])?;
        }
        csv.write_record([
            start,
            end,
            "TOTAL".to_string(),
            self.total_spending.to_string(),
            if self.total_spending.is_positive() {
                "100.00".to_string()
            } else {
                String::new()
            },
        ])?;

        csv.flush()?;
        Ok(())
    }

    /// Get top spending categories
    pub fn top_categories(&self, limit: usize) -> &[SpendingByCategory] {
        &self.categories[..limit.min(self.categories.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compute_period, Aggregator};
    use crate::models::{Account, Catalog, ExpenseEvent, PaymentMethod};
    use chrono::NaiveDate;

    fn summary(expenses: &[(i64, &str)]) -> LedgerSummary {
        let catalog = Catalog::new(
            ["Bank"],
            ["Groceries", "Rent", "Transport", "Cash Withdrawals"],
            "Cash Withdrawals",
        )
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let expenses: Vec<ExpenseEvent> = expenses
            .iter()
            .map(|(units, category)| {
                ExpenseEvent::new(
                    Account::new("Bank"),
                    Money::from_units(*units),
                    date,
                    ExpenseCategory::new(*category),
                    None,
                    PaymentMethod::Cash,
                )
                .unwrap()
            })
            .collect();
        Aggregator::new(&catalog).aggregate(compute_period(date), &[], &expenses, &[])
    }

    #[test]
    fn test_generate_spending_report() {
        let report = SpendingReport::generate(
            &summary(&[(50, "Groceries"), (30, "Transport"), (120, "Rent")]),
            &Settings::default(),
        );

        assert_eq!(report.total_spending, Money::from_units(200));
        assert_eq!(report.categories.len(), 3);
        assert_eq!(report.categories[0].category.name(), "Rent");
        assert_eq!(report.categories[0].percentage, 60.0);
        assert_eq!(report.top_categories(2).len(), 2);
        assert_eq!(report.top_categories(10).len(), 3);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let report = SpendingReport::generate(
            &summary(&[(40, "Transport"), (40, "Groceries")]),
            &Settings::default(),
        );
        assert_eq!(report.categories[0].category.name(), "Transport");
        assert_eq!(report.categories[1].category.name(), "Groceries");
    }

    #[test]
    fn test_format_terminal_with_icons() {
        let mut settings = Settings::default();
        settings.category_icons.insert("Rent".into(), "[R]".into());
        let report = SpendingReport::generate(&summary(&[(120, "Rent")]), &settings);

        let output = report.format_terminal();
        assert!(output.contains("Spending Report: 2024-12-27 to 2025-01-26"));
        assert!(output.contains("[R] Rent"));
        assert!(output.contains("100%"));

        let empty = SpendingReport::generate(&summary(&[]), &settings);
        assert!(empty.format_terminal().contains("No spending in this period."));
    }

    #[test]
    fn test_export_csv() {
        let report = SpendingReport::generate(
            &summary(&[(25, "Groceries"), (75, "Rent")]),
            &Settings::default(),
        );
        let mut output = Vec::new();
        report.export_csv(&mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert!(csv.contains("2024-12-27,2025-01-26,Rent,75.00,75.00"));
        assert!(csv.contains("2024-12-27,2025-01-26,Groceries,25.00,25.00"));
        assert!(csv.contains("TOTAL,100.00,100.00"));
    }
}
