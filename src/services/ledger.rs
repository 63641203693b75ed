//! Ledger service
//!
//! Records income, expenses and transfers through storage and answers
//! summary and listing queries. Expenses go through the balance check against
//! the active period before they are stored.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::config::settings::Settings;
use crate::engine::{validate_expense, Aggregator, LedgerSummary, Verdict};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Account, Catalog, ExpenseCategory, ExpenseEvent, IncomeEvent, Money, PaymentMethod, Period,
    RecordError, TransferEvent,
};
use crate::storage::Storage;

use super::period::PeriodService;

/// Input for a new income event
#[derive(Debug, Clone)]
pub struct NewIncome<'s> {
    pub account: &'s str,
    pub amount: Money,
    pub date: NaiveDate,
    pub source: &'s str,
    pub payment_method: PaymentMethod,
}

/// Input for a new expense event
#[derive(Debug, Clone)]
pub struct NewExpense<'s> {
    pub account: &'s str,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: &'s str,
    pub description: Option<String>,
    pub payment_method: PaymentMethod,
}

/// Input for a new transfer
#[derive(Debug, Clone)]
pub struct NewTransfer<'s> {
    pub from_account: &'s str,
    pub to_account: &'s str,
    pub amount: Money,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// Sort key for expense listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseSort {
    #[default]
    Date,
    Amount,
    Category,
}

impl ExpenseSort {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Some(Self::Date),
            "amount" => Some(Self::Amount),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

/// Filters and ordering for expense listings
///
/// The default lists everything, latest first.
#[derive(Debug, Clone)]
pub struct ExpenseQuery {
    pub account: Option<Account>,
    pub category: Option<ExpenseCategory>,
    pub period: Option<Period>,
    pub sort: ExpenseSort,
    pub descending: bool,
}

impl Default for ExpenseQuery {
    fn default() -> Self {
        Self {
            account: None,
            category: None,
            period: None,
            sort: ExpenseSort::Date,
            descending: true,
        }
    }
}

impl ExpenseQuery {
    fn matches(&self, expense: &ExpenseEvent) -> bool {
        self.account.as_ref().map_or(true, |a| expense.account() == a)
            && self.category.as_ref().map_or(true, |c| expense.category() == c)
            && self.period.as_ref().map_or(true, |p| p.contains(expense.date()))
    }

    fn compare(&self, a: &ExpenseEvent, b: &ExpenseEvent) -> Ordering {
        let by_date = a
            .date()
            .cmp(&b.date())
            .then_with(|| a.created_at().cmp(&b.created_at()));
        let ordering = match self.sort {
            ExpenseSort::Date => by_date,
            ExpenseSort::Amount => a.amount().cmp(&b.amount()).then(by_date),
            ExpenseSort::Category => a.category().cmp(b.category()).then(by_date),
        };
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Service for recording and querying ledger events
pub struct LedgerService<'a> {
    storage: &'a Storage,
    catalog: Catalog,
    periods: PeriodService,
}

impl<'a> LedgerService<'a> {
    /// Create a ledger service; `today` decides the active period
    pub fn new(storage: &'a Storage, settings: &Settings, today: NaiveDate) -> LedgerResult<Self> {
        Ok(Self {
            storage,
            catalog: settings.catalog()?,
            periods: PeriodService::new(settings, today),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The period containing today
    pub fn active_period(&self) -> Period {
        self.periods.current_period()
    }

    /// Resolve an account name against the catalog
    pub fn resolve_account(&self, name: &str) -> LedgerResult<Account> {
        self.catalog
            .account(name)
            .cloned()
            .ok_or_else(|| RecordError::UnknownAccount(name.trim().to_string()).into())
    }

    /// Resolve a category name against the catalog
    pub fn resolve_category(&self, name: &str) -> LedgerResult<ExpenseCategory> {
        self.catalog
            .category(name)
            .cloned()
            .ok_or_else(|| RecordError::UnknownCategory(name.trim().to_string()).into())
    }

    /// Record an income event
    pub fn record_income(&self, input: NewIncome<'_>) -> LedgerResult<IncomeEvent> {
        let account = self.resolve_account(input.account)?;
        let income = IncomeEvent::new(
            account,
            input.amount,
            input.date,
            input.source,
            input.payment_method,
        )?;

        self.storage.income.append(income.clone())?;
        self.storage.income.save()?;
        self.storage.log_create(&income)?;

        tracing::debug!(id = %income.id(), account = %income.account(), amount = %income.amount(), "recorded income");
        Ok(income)
    }

    /// Record an expense after checking the account can cover it
    ///
    /// The check uses the balance derived from events already accepted in
    /// the active period. A rejected expense is audited but never stored.
    pub fn record_expense(&self, input: NewExpense<'_>) -> LedgerResult<ExpenseEvent> {
        let account = self.resolve_account(input.account)?;
        let category = self.resolve_category(input.category)?;
        let expense = ExpenseEvent::new(
            account,
            input.amount,
            input.date,
            category,
            input.description,
            input.payment_method,
        )?;

        let summary = self.summary(self.active_period())?;
        if let Verdict::Reject(rejection) = validate_expense(&expense, &summary.per_account) {
            let err = LedgerError::from(rejection);
            tracing::warn!(account = %expense.account(), amount = %expense.amount(), "expense rejected: {}", err);
            self.storage.log_rejection(&expense, &err)?;
            return Err(err);
        }

        self.storage.expenses.append(expense.clone())?;
        self.storage.expenses.save()?;
        self.storage.log_create(&expense)?;

        tracing::debug!(id = %expense.id(), account = %expense.account(), amount = %expense.amount(), "recorded expense");
        Ok(expense)
    }

    /// Record a transfer between two configured accounts
    pub fn record_transfer(&self, input: NewTransfer<'_>) -> LedgerResult<TransferEvent> {
        let from = self.resolve_account(input.from_account)?;
        let to = self.resolve_account(input.to_account)?;
        let transfer = TransferEvent::new(from, to, input.amount, input.date, input.note)?;

        self.storage.transfers.append(transfer.clone())?;
        self.storage.transfers.save()?;
        self.storage.log_create(&transfer)?;

        tracing::debug!(id = %transfer.id(), amount = %transfer.amount(), "recorded transfer");
        Ok(transfer)
    }

    /// Aggregate everything stored for `period`
    pub fn summary(&self, period: Period) -> LedgerResult<LedgerSummary> {
        let incomes = self.storage.income.get_all()?;
        let expenses = self.storage.expenses.get_all()?;
        let transfers = self.storage.transfers.get_all()?;

        Ok(Aggregator::new(&self.catalog).aggregate(period, &incomes, &expenses, &transfers))
    }

    /// Summary of the active period
    pub fn active_summary(&self) -> LedgerResult<LedgerSummary> {
        self.summary(self.active_period())
    }

    /// Expenses matching `query`, in the requested order
    pub fn list_expenses(&self, query: &ExpenseQuery) -> LedgerResult<Vec<ExpenseEvent>> {
        let mut expenses: Vec<ExpenseEvent> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| query.matches(e))
            .collect();
        expenses.sort_by(|a, b| query.compare(a, b));
        Ok(expenses)
    }

    /// Look up an expense by its display id (e.g. "exp-1a2b3c4d")
    pub fn find_expense(&self, id: &str) -> LedgerResult<ExpenseEvent> {
        self.storage
            .expenses
            .find(id)?
            .ok_or_else(|| LedgerError::record_not_found("Expense", id.trim()))
    }

    /// Income events, latest first, optionally limited to a period
    pub fn list_income(&self, period: Option<&Period>) -> LedgerResult<Vec<IncomeEvent>> {
        let mut incomes: Vec<IncomeEvent> = self
            .storage
            .income
            .get_all()?
            .into_iter()
            .filter(|i| period.map_or(true, |p| p.contains(i.date())))
            .collect();
        incomes.sort_by(|a, b| (b.date(), b.created_at()).cmp(&(a.date(), a.created_at())));
        Ok(incomes)
    }

    /// Transfers, latest first, optionally limited to a period
    pub fn list_transfers(&self, period: Option<&Period>) -> LedgerResult<Vec<TransferEvent>> {
        let mut transfers: Vec<TransferEvent> = self
            .storage
            .transfers
            .get_all()?
            .into_iter()
            .filter(|t| period.map_or(true, |p| p.contains(t.date())))
            .collect();
        transfers.sort_by(|a, b| (b.date(), b.created_at()).cmp(&(a.date(), a.created_at())));
        Ok(transfers)
    }
}
