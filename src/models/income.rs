//! Income event model
//!
//! Money received into an account on a calendar date. Immutable once created.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::account::{Account, PaymentMethod};
use super::ids::IncomeId;
use super::money::Money;
use super::record::{require_positive, RecordError};

/// An income event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEvent {
    id: IncomeId,
    account: Account,
    amount: Money,
    date: NaiveDate,
    source: String,
    #[serde(default)]
    payment_method: PaymentMethod,
    created_at: DateTime<Utc>,
}

impl IncomeEvent {
    /// Create a new income event, validating amount and source
    pub fn new(
        account: Account,
        amount: Money,
        date: NaiveDate,
        source: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Result<Self, RecordError> {
        let event = Self {
            id: IncomeId::new(),
            account,
            amount,
            date,
            source: source.into().trim().to_string(),
            payment_method,
            created_at: Utc::now(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Re-check construction invariants (used for records loaded from disk)
    pub fn validate(&self) -> Result<(), RecordError> {
        require_positive(self.amount)?;
        if self.source.trim().is_empty() {
            return Err(RecordError::EmptySource);
        }
        Ok(())
    }

    pub fn id(&self) -> IncomeId {
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

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()
    }

    #[test]
    fn test_new_income() {
        let income = IncomeEvent::new(
            Account::new("Bank"),
            Money::from_units(1000),
            date(),
            " Salary ",
            PaymentMethod::BankTransfer,
        )
        .unwrap();

        assert_eq!(income.account().name(), "Bank");
        assert_eq!(income.amount(), Money::from_units(1000));
        assert_eq!(income.source(), "Salary");
        assert!(income.id().to_string().starts_with("inc-"));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        let err = IncomeEvent::new(
            Account::new("Bank"),
            Money::zero(),
            date(),
            "Salary",
            PaymentMethod::Other,
        )
        .unwrap_err();
        assert_eq!(err, RecordError::NonPositiveAmount(Money::zero()));

        assert!(IncomeEvent::new(
            Account::new("Bank"),
            Money::from_cents(-1),
            date(),
            "Salary",
            PaymentMethod::Other,
        )
        .is_err());
    }

    #[test]
    fn test_rejects_empty_source() {
        let err = IncomeEvent::new(
            Account::new("Bank"),
            Money::from_units(5),
            date(),
            "   ",
            PaymentMethod::Cash,
        )
        .unwrap_err();
        assert_eq!(err, RecordError::EmptySource);
    }

    #[test]
    fn test_serialization_defaults_payment_method() {
        let income = IncomeEvent::new(
            Account::new("Bank"),
            Money::from_units(10),
            date(),
            "Gift",
            PaymentMethod::Cash,
        )
        .unwrap();
        let json = serde_json::to_string(&income).unwrap();
        let back: IncomeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(income, back);

        let legacy = json.replace(r#","payment_method":"cash""#, "");
        let back: IncomeEvent = serde_json::from_str(&legacy).unwrap();
        assert_eq!(back.payment_method(), PaymentMethod::Other);
    }
}
