//! Expense event model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::account::{Account, PaymentMethod};
use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;
use super::record::{optional_text, require_positive, RecordError};

/// Money spent from an account in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEvent {
    id: ExpenseId,
    account: Account,
    amount: Money,
    date: NaiveDate,
    category: ExpenseCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    payment_method: PaymentMethod,
    created_at: DateTime<Utc>,
}

impl ExpenseEvent {
    pub fn new(
        account: Account,
        amount: Money,
        date: NaiveDate,
        category: ExpenseCategory,
        description: Option<String>,
        payment_method: PaymentMethod,
    ) -> Result<Self, RecordError> {
        let event = Self {
            id: ExpenseId::new(),
            account,
            amount,
            date,
            category,
            description: optional_text(description),
            payment_method,
            created_at: Utc::now(),
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        require_positive(self.amount)
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &ExpenseCategory {
        &self.category
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
