//! Savings-insights request
//!
//! Packages a period's income and per-category spending with a target savings
//! rate for an external advisor. Generating the advice is not done here.

use serde::Serialize;

use crate::engine::{CategorySpend, LedgerSummary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Period};

/// Input for a savings advisor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsInsightsRequest {
    pub period: Period,
    pub income: Money,
    pub expenses: Vec<CategorySpend>,
    /// Fraction of income to keep, within `[0, 1]`
    pub target_savings_rate: f64,
}

/// Where the period stands against the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsSnapshot {
    pub current_savings: Money,
    /// `None` without income
    pub current_savings_rate: Option<f64>,
    pub target_savings: Money,
    /// Extra savings needed to hit the target, zero once reached
    pub gap_to_target: Money,
}

impl SavingsInsightsRequest {
    /// Build a request from a period summary
    pub fn from_summary(summary: &LedgerSummary, target_savings_rate: f64) -> LedgerResult<Self> {
        if !(0.0..=1.0).contains(&target_savings_rate) {
            return Err(LedgerError::Validation(format!(
                "Target savings rate must be between 0 and 1 (got {})",
                target_savings_rate
            )));
        }

        Ok(Self {
            period: summary.period,
            income: summary.combined.income,
            expenses: summary.spending_by_category.clone(),
            target_savings_rate,
        })
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn snapshot(&self) -> SavingsSnapshot {
        let current_savings = self.income - self.total_expenses();
        let target_savings =
            Money::from_cents((self.income.cents() as f64 * self.target_savings_rate).round() as i64);
        let gap = target_savings - current_savings;

        SavingsSnapshot {
            current_savings,
            current_savings_rate: self
                .income
                .is_positive()
                .then(|| current_savings.cents() as f64 / self.income.cents() as f64),
            target_savings,
            gap_to_target: if gap.is_positive() { gap } else { Money::zero() },
        }
    }
}
