//! Finance categories
//!
//! Transactions and budget goals share this closed set of categories, so the
//! join between spending and goals is checked at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GraceError;

/// The fixed set of finance categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum FinanceCategory {
    Tithe,
    Offering,
    #[serde(rename = "First Fruits")]
    FirstFruits,
    Rent,
    Insurance,
    Debt,
    Transport,
    Groceries,
    #[default]
    Other,
}

impl FinanceCategory {
    /// All categories in declaration order
    pub const ALL: [FinanceCategory; 9] = [
        Self::Tithe,
        Self::Offering,
        Self::FirstFruits,
        Self::Rent,
        Self::Insurance,
        Self::Debt,
        Self::Transport,
        Self::Groceries,
        Self::Other,
    ];

    /// Stored name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tithe => "Tithe",
            Self::Offering => "Offering",
            Self::FirstFruits => "First Fruits",
            Self::Rent => "Rent",
            Self::Insurance => "Insurance",
            Self::Debt => "Debt",
            Self::Transport => "Transport",
            Self::Groceries => "Groceries",
            Self::Other => "Other",
        }
    }

    /// Translation key: lower-case name with spaces as underscores
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::Tithe => "tithe",
            Self::Offering => "offering",
            Self::FirstFruits => "first_fruits",
            Self::Rent => "rent",
            Self::Insurance => "insurance",
            Self::Debt => "debt",
            Self::Transport => "transport",
            Self::Groceries => "groceries",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FinanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FinanceCategory {
    type Err = GraceError;

    /// Accepts the stored name or the translation key, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().to_lowercase() == wanted || c.translation_key() == wanted)
            .ok_or_else(|| GraceError::Validation(format!("Unknown category '{}'", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&FinanceCategory::FirstFruits).unwrap(),
            "\"First Fruits\""
        );
        let parsed: FinanceCategory = serde_json::from_str("\"Groceries\"").unwrap();
        assert_eq!(parsed, FinanceCategory::Groceries);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("rent".parse::<FinanceCategory>().unwrap(), FinanceCategory::Rent);
        assert_eq!(
            "first_fruits".parse::<FinanceCategory>().unwrap(),
            FinanceCategory::FirstFruits
        );
        assert_eq!(
            "First Fruits".parse::<FinanceCategory>().unwrap(),
            FinanceCategory::FirstFruits
        );
        assert!("Vacation".parse::<FinanceCategory>().is_err());
    }

    #[test]
    fn test_translation_keys_follow_names() {
        for category in FinanceCategory::ALL {
            assert_eq!(
                category.translation_key(),
                category.name().to_lowercase().replace(' ', "_")
            );
        }
    }
}
