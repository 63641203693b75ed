//! Balance validation for proposed expenses
//!
//! The check runs against an aggregate the caller computed from the events
//! already accepted in the active period. It is advisory: nothing is locked
//! between the check and the write.

use std::collections::BTreeMap;

use crate::error::LedgerError;
use crate::models::{Account, ExpenseEvent, Money};

use super::aggregate::AccountAggregate;

/// Why a proposed expense was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    InsufficientFunds {
        account: Account,
        requested: Money,
        available: Money,
    },
}

/// Outcome of validating a proposed expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }

    /// Convert to a `Result`, mapping a rejection to its ledger error
    pub fn into_result(self) -> Result<(), LedgerError> {
        match self {
            Self::Accept => Ok(()),
            Self::Reject(rejection) => Err(rejection.into()),
        }
    }
}

impl From<Rejection> for LedgerError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::InsufficientFunds {
                account,
                requested,
                available,
            } => LedgerError::InsufficientFunds {
                account: account.name().to_string(),
                requested,
                available,
            },
        }
    }
}

/// Accept `proposed` unless its amount exceeds the account's balance
///
/// An account absent from `per_account` has a balance of zero. Spending the
/// exact balance is allowed.
pub fn validate_expense(
    proposed: &ExpenseEvent,
    per_account: &BTreeMap<Account, AccountAggregate>,
) -> Verdict {
    let available = per_account
        .get(proposed.account())
        .map(|aggregate| aggregate.balance)
        .unwrap_or_default();

    if proposed.amount() > available {
        Verdict::Reject(Rejection::InsufficientFunds {
            account: proposed.account().clone(),
            requested: proposed.amount(),
            available,
        })
    } else {
        Verdict::Accept
    }
}
