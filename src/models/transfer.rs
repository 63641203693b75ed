//! Transfer event model
//!
//! A transfer moves money between two distinct accounts. It is a single
//! record so the debit and credit can never be observed apart.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::ids::TransferId;
use super::money::Money;
use super::record::{optional_text, require_positive, RecordError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    id: TransferId,
    from_account: Account,
    to_account: Account,
    amount: Money,
    date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl TransferEvent {
    pub fn new(
        from_account: Account,
        to_account: Account,
        amount: Money,
        date: NaiveDate,
        note: Option<String>,
    ) -> Result<Self, RecordError> {
        let event = Self {
            id: TransferId::new(),
            from_account,
            to_account,
            amount,
            date,
            note: optional_text(note),
            created_at: Utc::now(),
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        require_positive(self.amount)?;
        if self.from_account == self.to_account {
            return Err(RecordError::SameAccountTransfer(
                self.from_account.name().to_string(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> TransferId {
        self.id
    }

    pub fn from_account(&self) -> &Account {
        &self.from_account
    }

    pub fn to_account(&self) -> &Account {
        &self.to_account
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Signed effect of this transfer on `account`'s balance
    pub fn net_for(&self, account: &Account) -> Money {
        if *account == self.to_account {
            self.amount
        } else if *account == self.from_account {
            -self.amount
        } else {
            Money::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn test_net_for() {
        let transfer = TransferEvent::new(
            Account::new("A"),
            Account::new("B"),
            Money::from_units(200),
            date(),
            None,
        )
        .unwrap();

        assert_eq!(transfer.net_for(&Account::new("A")), Money::from_units(-200));
        assert_eq!(transfer.net_for(&Account::new("B")), Money::from_units(200));
        assert_eq!(transfer.net_for(&Account::new("C")), Money::zero());
        assert!(transfer.id().to_string().starts_with("trf-"));
    }

    #[test]
    fn test_rejects_same_account() {
        let err = TransferEvent::new(
            Account::new("A"),
            Account::new("A"),
            Money::from_units(10),
            date(),
            None,
        )
        .unwrap_err();
        assert_eq!(err, RecordError::SameAccountTransfer("A".into()));
    }

    #[test]
    fn test_rejects_zero_amount() {
        assert!(TransferEvent::new(
            Account::new("A"),
            Account::new("B"),
            Money::zero(),
            date(),
            Some("rent share".into()),
        )
        .is_err());
    }
}
