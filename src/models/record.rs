//! Construction errors shared by the ledger event records

use std::fmt;

use super::money::Money;

/// Reasons an income, expense or transfer record cannot be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    SameAccountTransfer(String),
    EmptySource,
    UnknownAccount(String),
    UnknownCategory(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} exceeds the largest single amount of {}",
                amount, MAX_RECORD_AMOUNT
            ),
            Self::SameAccountTransfer(account) => {
                write!(f, "Cannot transfer from '{}' to itself", account)
            }
            Self::EmptySource => write!(f, "Income source cannot be empty"),
            Self::UnknownAccount(name) => write!(f, "Unknown account: {}", name),
            Self::UnknownCategory(name) => write!(f, "Unknown expense category: {}", name),
        }
    }
}

impl std::error::Error for RecordError {}

/// Largest amount a single record may carry (10,000,000,000.00)
///
/// Keeps period sums far inside `i64` cents: millions of records at this
/// ceiling still total less than `i64::MAX`.
pub const MAX_RECORD_AMOUNT: Money = Money::from_cents(1_000_000_000_000);

/// Amounts on every record must be strictly positive and at most
/// [`MAX_RECORD_AMOUNT`]
pub(crate) fn require_positive(amount: Money) -> Result<(), RecordError> {
    if !amount.is_positive() {
        Err(RecordError::NonPositiveAmount(amount))
    } else if amount > MAX_RECORD_AMOUNT {
        Err(RecordError::AmountTooLarge(amount))
    } else {
        Ok(())
    }
}

/// Trim free text, mapping blank input to `None`
pub(crate) fn optional_text(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}
