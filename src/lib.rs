//! pocket-ledger - multi-account income, expense and transfer tracking
//!
//! This library records income, expenses and transfers across a fixed set of
//! accounts and derives per-account and combined totals for a billing period
//! running from the 27th of one month to the 26th of the next. An expense is
//! only accepted when the account's derived balance covers it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, categories, events, periods)
//! - `engine`: Cycle calculation, period filtering, aggregation and balance validation
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`, `display`, `export`: Output for the CLI
//!
//! # Example
//!
//! ```rust,ignore
//! use pocket_ledger::config::{paths::LedgerPaths, settings::Settings};
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
