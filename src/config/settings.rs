//! User settings for pocket-ledger
//!
//! Holds the closed sets of accounts and expense categories the engine works
//! against, the billing cycle policy and display preferences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::paths::LedgerPaths;
use crate::engine::CyclePolicy;
use crate::error::LedgerError;
use crate::models::{Catalog, ExpenseCategory};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency prefix used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How periods are cut
    #[serde(default)]
    pub cycle_policy: CyclePolicy,

    #[serde(default = "default_accounts")]
    pub accounts: Vec<String>,

    #[serde(default = "default_expense_categories")]
    pub expense_categories: Vec<String>,

    /// Category whose expenses count as cash withdrawals
    #[serde(default = "default_cash_withdrawal_category")]
    pub cash_withdrawal_category: String,

    /// Optional display icon per category name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub category_icons: BTreeMap<String, String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Nu. ".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_accounts() -> Vec<String> {
    ["Bank", "Savings", "Cash"].map(String::from).to_vec()
}

fn default_cash_withdrawal_category() -> String {
    "Cash Withdrawals".to_string()
}

const DEFAULT_CATEGORIES: &[&str] = &[
    "Bathroom and Toilet Supplies",
    "Books and Study Materials",
    "Business Travel",
    "Cable or TV Subscription",
    "Car Insurance",
    "Cash Withdrawals",
    "Charity Donations",
    "Childcare Services",
    "Clothing",
    "Coffee, Snacks, and Drinks",
    "Concerts and Events",
    "Dining Out",
    "Electronics",
    "Emergency Fund",
    "Entertainment Subscriptions",
    "Fines and Penalties",
    "Flight Tickets",
    "Food Delivery",
    "Fuel",
    "Gifts",
    "Groceries",
    "Gym and Fitness",
    "Haircuts and Salon",
    "Health Insurance",
    "Hobbies and Crafts",
    "Home Cleaning Supplies",
    "Home Decor and Furnishings",
    "Hotel Stays",
    "Household Supplies",
    "Income Taxes",
    "Internet",
    "Kids' Supplies",
    "Laundry and Dry Cleaning",
    "Loan Payments",
    "Medical and Health Supplies",
    "Movies and Shows",
    "Online Courses and Learning Platforms",
    "Others",
    "Parking Fees",
    "Pet Food",
    "Pet Toys and Accessories",
    "Pharmacy and Medication",
    "Professional Services",
    "Public Transport",
    "Religious Offerings",
    "Rent",
    "Repairs and Maintenance",
    "School Fees",
    "Skincare and Grooming",
    "Software Subscriptions",
    "Souvenirs",
    "Streaming Subscriptions",
    "Taxi and Ride-Sharing",
    "Toys and Activities",
    "Unplanned Expenses",
    "Utilities - Electricity",
    "Utilities - Gas",
    "Vehicle Maintenance",
    "Vegetables",
    "Video Games",
];

fn default_expense_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            cycle_policy: CyclePolicy::default(),
            accounts: default_accounts(),
            expense_categories: default_expense_categories(),
            cash_withdrawal_category: default_cash_withdrawal_category(),
            category_icons: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            read_json(&settings_path).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Not saved here; `init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Validate the configured names and build the engine catalog
    pub fn catalog(&self) -> Result<Catalog, LedgerError> {
        Ok(Catalog::new(
            self.accounts.iter().cloned(),
            self.expense_categories.iter().cloned(),
            self.cash_withdrawal_category.clone(),
        )?)
    }

    /// Display icon configured for a category, if any
    pub fn icon_for(&self, category: &ExpenseCategory) -> Option<&str> {
        self.category_icons
            .iter()
            .find(|(name, _)| category.matches(name))
            .map(|(_, icon)| icon.as_str())
    }

    /// Format a date with the configured format
    pub fn format_date(&self, date: chrono::NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "Nu. ");
        assert_eq!(settings.cycle_policy, CyclePolicy::BillingCycle);
        assert_eq!(settings.cash_withdrawal_category, "Cash Withdrawals");

        let catalog = settings.catalog().unwrap();
        assert_eq!(catalog.accounts().len(), 3);
        assert!(catalog.category("groceries").is_some());
        assert_eq!(catalog.cash_withdrawal_category().name(), "Cash Withdrawals");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.cycle_policy = CyclePolicy::CalendarMonth;
        settings.accounts = vec!["Checking".into(), "Wallet".into()];
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.cycle_policy, CyclePolicy::CalendarMonth);
        assert_eq!(loaded.accounts, vec!["Checking", "Wallet"]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"accounts":["Only"]}"#).unwrap();
        assert_eq!(settings.accounts, vec!["Only"]);
        assert_eq!(settings.currency_symbol, "Nu. ");
        assert!(settings.catalog().is_ok());
    }

    #[test]
    fn test_invalid_catalog_is_config_error() {
        let mut settings = Settings::default();
        settings.cash_withdrawal_category = "ATM".into();
        let err = settings.catalog().unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_icon_lookup() {
        let mut settings = Settings::default();
        settings
            .category_icons
            .insert("Groceries".into(), "cart".into());
        assert_eq!(settings.icon_for(&ExpenseCategory::new("groceries")), Some("cart"));
        assert_eq!(settings.icon_for(&ExpenseCategory::new("Rent")), None);
    }
}
