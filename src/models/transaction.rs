//! Transaction model
//!
//! A dated, categorized expense. Amounts are always positive; the sign is
//! implied by the finance tracker recording spending only.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::FinanceCategory;
use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Amount spent (always positive)
    pub amount: Money,

    pub date: NaiveDate,

    pub category: FinanceCategory,

    #[serde(default)]
    pub notes: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        date: NaiveDate,
        category: FinanceCategory,
        notes: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            amount,
            date,
            category,
            notes: notes.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the transaction falls in the same calendar month and year as `day`
    pub fn in_month_of(&self, day: NaiveDate) -> bool {
        self.date.year() == day.year() && self.date.month() == day.month()
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            Money::from_units(350),
            date(2025, 1, 10),
            FinanceCategory::Groceries,
            "Weekly shopping",
        );
        assert_eq!(txn.amount.cents(), 35000);
        assert_eq!(txn.category, FinanceCategory::Groceries);
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let zero = Transaction::new(Money::zero(), date(2025, 1, 10), FinanceCategory::Other, "");
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let negative =
            Transaction::new(Money::from_cents(-1), date(2025, 1, 10), FinanceCategory::Other, "");
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_in_month_of() {
        let txn = Transaction::new(Money::from_units(1), date(2024, 3, 31), FinanceCategory::Rent, "");
        assert!(txn.in_month_of(date(2024, 3, 1)));
        assert!(!txn.in_month_of(date(2024, 4, 1)));
        assert!(!txn.in_month_of(date(2023, 3, 31)));
    }

    #[test]
    fn test_serialization_uses_category_name() {
        let txn = Transaction::new(
            Money::from_units(20),
            date(2025, 2, 1),
            FinanceCategory::FirstFruits,
            "",
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["category"], "First Fruits");
        assert_eq!(json["amount"], 2000);
        assert_eq!(json["date"], "2025-02-01");
    }
}
