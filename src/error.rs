//! Custom error types for pocket-ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{
    CatalogError, DateParseError, Money, MoneyParseError, PeriodParseError, RecordError,
};

/// The main error type for pocket-ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (dates, amounts, period strings)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record that violates its construction invariants
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The proposed expense exceeds the account's derived balance
    #[error("Insufficient funds in account '{account}': requested {requested}, available {available}")]
    InsufficientFunds {
        account: String,
        requested: Money,
        available: Money,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "not found" error for a ledger record looked up by id
    pub fn record_not_found(entity_type: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidRecord(_))
    }

    /// Check if this is an insufficient funds rejection
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<RecordError> for LedgerError {
    fn from(err: RecordError) -> Self {
        Self::InvalidRecord(err.to_string())
    }
}

impl From<CatalogError> for LedgerError {
    fn from(err: CatalogError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<MoneyParseError> for LedgerError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PeriodParseError> for LedgerError {
    fn from(err: PeriodParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<DateParseError> for LedgerError {
    fn from(err: DateParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for pocket-ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
