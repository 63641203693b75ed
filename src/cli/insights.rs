//! Savings insights CLI command
//!
//! Prints the request an external savings advisor would receive, either as
//! a readable snapshot or as JSON.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::display::format_percentage;
use crate::error::LedgerResult;
use crate::services::{LedgerService, PeriodService, SavingsInsightsRequest};
use crate::storage::Storage;

/// Handle the insights command
pub fn handle_insights_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    period: Option<&str>,
    target_rate: f64,
    json: bool,
) -> LedgerResult<()> {
    let ledger = LedgerService::new(storage, settings, today)?;
    let period_service = PeriodService::new(settings, today);

    let period = period_service.parse_or_current(period)?;
    let request = SavingsInsightsRequest::from_summary(&ledger.summary(period)?, target_rate)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let symbol = &settings.currency_symbol;
    let snapshot = request.snapshot();

    println!(
        "Savings Insights: {}",
        period_service.format_period_friendly(&period)
    );
    println!("{}", "-".repeat(40));
    println!("Income:          {}", request.income.format_with_symbol(symbol));
    println!(
        "Expenses:        {}",
        request.total_expenses().format_with_symbol(symbol)
    );
    println!(
        "Savings:         {}",
        snapshot.current_savings.format_with_symbol(symbol)
    );
    match snapshot.current_savings_rate {
        Some(rate) => println!("Savings rate:    {}", format_percentage(rate * 100.0)),
        None => println!("Savings rate:    n/a (no income)"),
    }
    println!(
        "Target:          {} ({})",
        snapshot.target_savings.format_with_symbol(symbol),
        format_percentage(target_rate * 100.0)
    );
    if snapshot.gap_to_target.is_positive() {
        println!(
            "Gap to target:   {}",
            snapshot.gap_to_target.format_with_symbol(symbol)
        );
    } else {
        println!("Target reached.");
    }

    if !request.expenses.is_empty() {
        println!();
        println!("Expenses by category:");
        for spend in &request.expenses {
            println!(
                "  {:<30} {:>14}",
                spend.category.to_string(),
                spend.amount.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
