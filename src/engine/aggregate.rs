//! Ledger aggregation
//!
//! Turns the income, expense and transfer events of one period into
//! per-account and combined totals. Aggregates are recomputed from the events
//! on every call and never stored.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::{
    Account, Catalog, ExpenseCategory, ExpenseEvent, IncomeEvent, Money, Period, TransferEvent,
};

use super::filter::in_period;

/// Derived totals for one account within a period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountAggregate {
    pub account: Account,
    pub income_total: Money,
    pub expense_total: Money,
    /// Portion of `expense_total` booked under the cash withdrawal category
    pub cash_withdrawal_total: Money,
    pub transfers_in: Money,
    pub transfers_out: Money,
    /// `income - expenses + transfers_in - transfers_out`
    pub balance: Money,
}

impl AccountAggregate {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            income_total: Money::zero(),
            expense_total: Money::zero(),
            cash_withdrawal_total: Money::zero(),
            transfers_in: Money::zero(),
            transfers_out: Money::zero(),
            balance: Money::zero(),
        }
    }

    fn add_income(&mut self, amount: Money) {
        self.income_total += amount;
        self.balance += amount;
    }

    fn add_expense(&mut self, amount: Money, cash_withdrawal: bool) {
        self.expense_total += amount;
        if cash_withdrawal {
            self.cash_withdrawal_total += amount;
        }
        self.balance -= amount;
    }

    fn add_transfer_in(&mut self, amount: Money) {
        self.transfers_in += amount;
        self.balance += amount;
    }

    fn add_transfer_out(&mut self, amount: Money) {
        self.transfers_out += amount;
        self.balance -= amount;
    }

    pub fn net_transfers(&self) -> Money {
        self.transfers_in - self.transfers_out
    }

    /// Expenses as a percentage of income, `None` without income
    pub fn expense_ratio(&self) -> Option<f64> {
        self.expense_total.percent_of(self.income_total)
    }

    /// How far expenses ran past income, if they did
    pub fn overspend(&self) -> Option<Money> {
        let over = self.expense_total - self.income_total;
        over.is_positive().then_some(over)
    }
}

/// Totals across every account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CombinedTotals {
    pub income: Money,
    pub expenses: Money,
    pub cash_withdrawals: Money,
    /// `income - expenses`; transfers cancel out across the ledger
    pub balance: Money,
}

impl CombinedTotals {
    pub fn expense_ratio(&self) -> Option<f64> {
        self.expenses.percent_of(self.income)
    }

    pub fn overspend(&self) -> Option<Money> {
        let over = self.expenses - self.income;
        over.is_positive().then_some(over)
    }
}

/// Summed spending in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpend {
    pub category: ExpenseCategory,
    pub amount: Money,
}

/// Everything derived from one period's events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub period: Period,
    /// Accounts with income or expenses this period, in first-appearance order
    pub active_accounts: Vec<Account>,
    /// Aggregates for every account touched by any event, transfers included
    pub per_account: BTreeMap<Account, AccountAggregate>,
    pub combined: CombinedTotals,
    pub highest_spending_category: Option<CategorySpend>,
    /// Category totals in first-encountered order
    pub spending_by_category: Vec<CategorySpend>,
}

impl LedgerSummary {
    pub fn account(&self, account: &Account) -> Option<&AccountAggregate> {
        self.per_account.get(account)
    }

    /// Derived balance of `account`; zero when it has no events
    pub fn balance_of(&self, account: &Account) -> Money {
        self.account(account)
            .map(|a| a.balance)
            .unwrap_or_default()
    }

    /// Aggregates of the active accounts in display order
    pub fn active_aggregates(&self) -> impl Iterator<Item = &AccountAggregate> {
        self.active_accounts
            .iter()
            .filter_map(|account| self.per_account.get(account))
    }

    pub fn has_activity(&self) -> bool {
        !self.per_account.is_empty()
    }
}

/// Computes [`LedgerSummary`] values against a catalog
pub struct Aggregator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Aggregator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Aggregate the events dated within `period`
    ///
    /// Events outside the period are ignored, so callers may pass the full
    /// history. Records are expected to satisfy their construction invariants.
    pub fn aggregate(
        &self,
        period: Period,
        incomes: &[IncomeEvent],
        expenses: &[ExpenseEvent],
        transfers: &[TransferEvent],
    ) -> LedgerSummary {
        let mut active_accounts: Vec<Account> = Vec::new();
        let mut per_account: BTreeMap<Account, AccountAggregate> = BTreeMap::new();
        let mut combined = CombinedTotals::default();
        let mut spending = CategoryTotals::default();

        let mut touch = |account: &Account| -> Account {
            if !active_accounts.contains(account) {
                active_accounts.push(account.clone());
            }
            account.clone()
        };

        for income in in_period(&period, incomes) {
            debug_assert!(income.validate().is_ok(), "invalid income reached aggregation");
            let account = touch(income.account());
            per_account
                .entry(account.clone())
                .or_insert_with(|| AccountAggregate::new(account))
                .add_income(income.amount());
            combined.income += income.amount();
        }

        for expense in in_period(&period, expenses) {
            debug_assert!(expense.validate().is_ok(), "invalid expense reached aggregation");
            let cash = self.catalog.is_cash_withdrawal(expense.category());
            let account = touch(expense.account());
            per_account
                .entry(account.clone())
                .or_insert_with(|| AccountAggregate::new(account))
                .add_expense(expense.amount(), cash);

            combined.expenses += expense.amount();
            if cash {
                combined.cash_withdrawals += expense.amount();
            }
            spending.add(expense.category(), expense.amount());
        }

        for transfer in in_period(&period, transfers) {
            debug_assert!(transfer.validate().is_ok(), "invalid transfer reached aggregation");
            let from = transfer.from_account().clone();
            per_account
                .entry(from.clone())
                .or_insert_with(|| AccountAggregate::new(from))
                .add_transfer_out(transfer.amount());

            let to = transfer.to_account().clone();
            per_account
                .entry(to.clone())
                .or_insert_with(|| AccountAggregate::new(to))
                .add_transfer_in(transfer.amount());
        }

        combined.balance = combined.income - combined.expenses;
        let highest_spending_category = spending.highest();

        tracing::debug!(
            period = %period,
            accounts = per_account.len(),
            income = %combined.income,
            expenses = %combined.expenses,
            "aggregated ledger"
        );

        LedgerSummary {
            period,
            active_accounts,
            per_account,
            combined,
            highest_spending_category,
            spending_by_category: spending.into_vec(),
        }
    }
}

/// Category totals that remember first-encounter order
#[derive(Default)]
struct CategoryTotals {
    totals: Vec<CategorySpend>,
    index: HashMap<ExpenseCategory, usize>,
}

impl CategoryTotals {
    fn add(&mut self, category: &ExpenseCategory, amount: Money) {
        match self.index.get(category) {
            Some(&i) => self.totals[i].amount += amount,
            None => {
                self.index.insert(category.clone(), self.totals.len());
                self.totals.push(CategorySpend {
                    category: category.clone(),
                    amount,
                });
            }
        }
    }

    /// Greatest total; a later category must strictly exceed to take the lead
    fn highest(&self) -> Option<CategorySpend> {
        let mut best: Option<&CategorySpend> = None;
        for spend in &self.totals {
            if best.map_or(true, |b| spend.amount > b.amount) {
                best = Some(spend);
            }
        }
        best.cloned()
    }

    fn into_vec(self) -> Vec<CategorySpend> {
        self.totals
    }
}
