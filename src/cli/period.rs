//! Period CLI command
//!
//! Shows which period a date falls into and the periods around it.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::models::parse_date;
use crate::services::PeriodService;

/// Handle the period command
pub fn handle_period_command(
    settings: &Settings,
    today: NaiveDate,
    date: Option<&str>,
    recent: Option<usize>,
) -> LedgerResult<()> {
    let service = PeriodService::new(settings, today);

    if let Some(count) = recent {
        println!("Last {} periods ({}):", count, service.policy());
        for period in service.recent_periods(count) {
            let marker = if service.is_current(&period) { " (current)" } else { "" };
            println!(
                "  {}  {}{}",
                period,
                service.format_period_friendly(&period),
                marker
            );
        }
        return Ok(());
    }

    let date = match date {
        Some(s) => parse_date(s)?,
        None => today,
    };
    let period = service.period_for_date(date);

    println!("Date:     {}", settings.format_date(date));
    println!(
        "Period:   {} ({})",
        service.format_period_friendly(&period),
        period
    );
    println!("Days:     {}", period.days());
    println!("Policy:   {}", service.policy());
    println!("Previous: {}", service.previous_period(&period));
    println!("Next:     {}", service.next_period(&period));

    Ok(())
}
