//! Expense categories and the closed catalog of accounts and categories
//!
//! The catalog is configuration data handed to the engine; nothing in the
//! engine hard-codes an account or category name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::Account;

/// Category of an expense, drawn from the configured closed set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseCategory(String);

impl ExpenseCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name.trim())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ExpenseCategory {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Errors building a catalog from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    NoAccounts,
    EmptyName,
    DuplicateAccount(String),
    DuplicateCategory(String),
    MissingCashWithdrawalCategory(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAccounts => write!(f, "At least one account must be configured"),
            Self::EmptyName => write!(f, "Account and category names cannot be empty"),
            Self::DuplicateAccount(name) => write!(f, "Duplicate account: {}", name),
            Self::DuplicateCategory(name) => write!(f, "Duplicate category: {}", name),
            Self::MissingCashWithdrawalCategory(name) => write!(
                f,
                "Cash withdrawal category '{}' is not among the expense categories",
                name
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The closed sets of accounts and expense categories
#[derive(Debug, Clone)]
pub struct Catalog {
    accounts: Vec<Account>,
    categories: Vec<ExpenseCategory>,
    cash_withdrawal: ExpenseCategory,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate names (case-insensitive)
    pub fn new<A, C>(
        accounts: impl IntoIterator<Item = A>,
        categories: impl IntoIterator<Item = C>,
        cash_withdrawal: impl Into<String>,
    ) -> Result<Self, CatalogError>
    where
        A: Into<String>,
        C: Into<String>,
    {
        let mut account_list: Vec<Account> = Vec::new();
        for name in accounts {
            let account = Account::new(name);
            if account.name().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if account_list.iter().any(|a| a.matches(account.name())) {
                return Err(CatalogError::DuplicateAccount(account.name().to_string()));
            }
            account_list.push(account);
        }
        if account_list.is_empty() {
            return Err(CatalogError::NoAccounts);
        }

        let mut category_list: Vec<ExpenseCategory> = Vec::new();
        for name in categories {
            let category = ExpenseCategory::new(name);
            if category.name().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if category_list.iter().any(|c| c.matches(category.name())) {
                return Err(CatalogError::DuplicateCategory(category.name().to_string()));
            }
            category_list.push(category);
        }

        let cash_name = cash_withdrawal.into();
        let cash_withdrawal = category_list
            .iter()
            .find(|c| c.matches(&cash_name))
            .cloned()
            .ok_or(CatalogError::MissingCashWithdrawalCategory(cash_name))?;

        Ok(Self {
            accounts: account_list,
            categories: category_list,
            cash_withdrawal,
        })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn categories(&self) -> &[ExpenseCategory] {
        &self.categories
    }

    /// The designated "Cash Withdrawals" category
    pub fn cash_withdrawal_category(&self) -> &ExpenseCategory {
        &self.cash_withdrawal
    }

    pub fn is_cash_withdrawal(&self, category: &ExpenseCategory) -> bool {
        *category == self.cash_withdrawal
    }

    /// Look up an account by name (case-insensitive)
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.matches(name))
    }

    /// Look up a category by name (case-insensitive)
    pub fn category(&self, name: &str) -> Option<&ExpenseCategory> {
        self.categories.iter().find(|c| c.matches(name))
    }

    pub fn contains_account(&self, account: &Account) -> bool {
        self.accounts.contains(account)
    }

    pub fn contains_category(&self, category: &ExpenseCategory) -> bool {
        self.categories.contains(category)
    }
}
