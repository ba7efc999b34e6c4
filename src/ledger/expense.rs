use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Spending bucket an expense is tagged with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    /// Essential spending.
    Need,
    /// Discretionary spending.
    Want,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 2] = [ExpenseCategory::Need, ExpenseCategory::Want];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Need => "Need",
            ExpenseCategory::Want => "Want",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category `{}` (use need or want)", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "need" | "needs" | "n" => Ok(ExpenseCategory::Need),
            "want" | "wants" | "w" => Ok(ExpenseCategory::Want),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

/// A single logged expense. Fields are private so a record cannot change after
/// it has been accepted by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseRecord {
    name: String,
    amount: u64,
    category: ExpenseCategory,
}

impl ExpenseRecord {
    pub(crate) fn new(name: String, amount: u64, category: ExpenseCategory) -> Self {
        Self {
            name,
            amount,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn category(&self) -> ExpenseCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_case_insensitively() {
        assert_eq!("Need".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Need));
        assert_eq!(" WANT ".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Want));
        assert_eq!("w".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Want));
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "luxury".parse::<ExpenseCategory>().unwrap_err();
        assert!(err.to_string().contains("luxury"));
    }
}
