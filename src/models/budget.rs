//! Budget goal model
//!
//! A monthly spending goal for one finance category. The goal set has at most
//! one entry per category, and zero-amount goals are never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::FinanceCategory;
use super::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetGoal {
    pub category: FinanceCategory,
    pub amount: Money,
}

impl BudgetGoal {
    pub fn new(category: FinanceCategory, amount: Money) -> Self {
        Self { category, amount }
    }

    /// Collapse goals into the stored form: one per category (later entries
    /// win), non-positive amounts dropped, ordered by category.
    pub fn normalize<I>(goals: I) -> Vec<BudgetGoal>
    where
        I: IntoIterator<Item = BudgetGoal>,
    {
        let by_category: BTreeMap<FinanceCategory, Money> = goals
            .into_iter()
            .map(|g| (g.category, g.amount))
            .collect();

        by_category
            .into_iter()
            .filter(|(_, amount)| amount.is_positive())
            .map(|(category, amount)| BudgetGoal::new(category, amount))
            .collect()
    }
}
