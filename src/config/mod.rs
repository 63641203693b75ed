//! Configuration module for pocket-ledger
//!
//! - Path resolution for the data directory
//! - User settings persistence, including the account and category catalog

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
