//! Account model
//!
//! Accounts are names drawn from a closed set configured in settings. The
//! engine treats them as opaque identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A money-holding bucket (bank account, wallet, ...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Case-insensitive name comparison
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Account {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How an income or expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    DebitCard,
    CreditCard,
    BankTransfer,
    MobileWallet,
    #[default]
    Other,
}

impl PaymentMethod {
    /// Parse a payment method from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "cash" => Some(Self::Cash),
            "debit" | "debit_card" => Some(Self::DebitCard),
            "credit" | "credit_card" => Some(Self::CreditCard),
            "bank" | "transfer" | "bank_transfer" => Some(Self::BankTransfer),
            "mobile" | "wallet" | "mobile_wallet" => Some(Self::MobileWallet),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn all() -> &'static [PaymentMethod] {
        &[
            Self::Cash,
            Self::DebitCard,
            Self::CreditCard,
            Self::BankTransfer,
            Self::MobileWallet,
            Self::Other,
        ]
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cash => "Cash",
            Self::DebitCard => "Debit Card",
            Self::CreditCard => "Credit Card",
            Self::BankTransfer => "Bank Transfer",
            Self::MobileWallet => "Mobile Wallet",
            Self::Other => "Other",
        };
        f.pad(label)
    }
}
