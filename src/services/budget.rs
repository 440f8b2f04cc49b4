//! Budget service
//!
//! Aggregates this month's spending against the per-category budget goals
//! and classifies progress toward each goal.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::GraceResult;
use crate::models::{BudgetGoal, FinanceCategory, Money, Transaction};
use crate::services::calendar::MonthCursor;
use crate::storage::Storage;

/// Progress above this fraction of a goal is "near limit"
pub const NEAR_LIMIT_THRESHOLD: f64 = 0.70;

/// Progress above this fraction of a goal is "over limit"
pub const OVER_LIMIT_THRESHOLD: f64 = 0.90;

/// Budget totals for the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub total_budget: Money,
    /// Spending in budgeted categories only; may exceed `total_budget`
    pub total_spent: Money,
}

impl MonthlySummary {
    pub fn remaining(&self) -> Money {
        self.total_budget - self.total_spent
    }

    pub fn is_overspent(&self) -> bool {
        self.total_spent > self.total_budget
    }
}

/// Summarize this month's spending against the budget goals
///
/// Returns `None` when the goals add up to zero, meaning no budget is in use.
pub fn monthly_summary(
    transactions: &[Transaction],
    goals: &[BudgetGoal],
    today: NaiveDate,
) -> Option<MonthlySummary> {
    let total_budget: Money = goals.iter().map(|g| g.amount).sum();
    if total_budget.is_zero() {
        return None;
    }

    let total_spent = transactions
        .iter()
        .filter(|t| t.in_month_of(today))
        .filter(|t| goals.iter().any(|g| g.category == t.category))
        .map(|t| t.amount)
        .sum();

    Some(MonthlySummary {
        total_budget,
        total_spent,
    })
}

/// This month's spending per category, budgeted or not
pub fn spend_by_category(transactions: &[Transaction], today: NaiveDate) -> BTreeMap<FinanceCategory, Money> {
    let mut totals = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.in_month_of(today)) {
        *totals.entry(txn.category).or_insert_with(Money::zero) += txn.amount;
    }
    totals
}

/// Progress of one category toward its goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProgress {
    pub category: FinanceCategory,
    pub spent: Money,
    pub goal: Money,
    /// `spent / goal` capped at 1.0, or 0 without a goal
    pub fraction: f64,
    pub near_limit: bool,
    pub over_limit: bool,
}

impl BudgetProgress {
    pub fn new(category: FinanceCategory, spent: Money, goal: Money) -> Self {
        let fraction = spent.ratio_of(goal).map_or(0.0, |r| r.min(1.0));
        let over_limit = fraction > OVER_LIMIT_THRESHOLD;
        let near_limit = fraction > NEAR_LIMIT_THRESHOLD && !over_limit;

        Self {
            category,
            spent,
            goal,
            fraction,
            near_limit,
            over_limit,
        }
    }

    /// Whole-number percentage for display
    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0).round() as u32
    }
}

/// One progress row per goal, in goal order
pub fn goal_progress(transactions: &[Transaction], goals: &[BudgetGoal], today: NaiveDate) -> Vec<BudgetProgress> {
    let spent = spend_by_category(transactions, today);
    goals
        .iter()
        .map(|g| {
            let spent = spent.get(&g.category).copied().unwrap_or_default();
            BudgetProgress::new(g.category, spent, g.amount)
        })
        .collect()
}

/// Total spending for each of the last `months` months, oldest first
pub fn monthly_totals(transactions: &[Transaction], today: NaiveDate, months: u32) -> Vec<(MonthCursor, Money)> {
    let current = MonthCursor::containing(today);
    (0..months as i32)
        .rev()
        .map(|back| {
            let cursor = current.offset(-back);
            let total = transactions
                .iter()
                .filter(|t| cursor.contains(t.date))
                .map(|t| t.amount)
                .sum();
            (cursor, total)
        })
        .collect()
}

/// Service for budget goal management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// Budget overview for the current month
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    pub summary: Option<MonthlySummary>,
    pub progress: Vec<BudgetProgress>,
    pub by_category: BTreeMap<FinanceCategory, Money>,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn goals(&self) -> GraceResult<Vec<BudgetGoal>> {
        self.storage.budget_goals()
    }

    /// Replace the whole goal set
    ///
    /// Zero amounts are dropped and a category given twice keeps its last
    /// amount.
    pub fn set_goals<I>(&self, goals: I) -> GraceResult<Vec<BudgetGoal>>
    where
        I: IntoIterator<Item = BudgetGoal>,
    {
        let before = self.goals()?;
        let after = BudgetGoal::normalize(goals);

        self.storage.set_budget_goals(&after)?;
        self.storage.audit(&AuditEntry::update(
            EntityType::BudgetGoals,
            "budget",
            None,
            &before,
            &after,
        ));

        info!(goals = after.len(), "budget goals saved");
        Ok(after)
    }

    /// Set or change a single category's goal, keeping the others
    pub fn set_goal(&self, category: FinanceCategory, amount: Money) -> GraceResult<Vec<BudgetGoal>> {
        let mut goals = self.goals()?;
        goals.push(BudgetGoal::new(category, amount));
        self.set_goals(goals)
    }

    pub fn clear(&self) -> GraceResult<()> {
        self.set_goals(Vec::new()).map(|_| ())
    }

    pub fn overview(&self, today: NaiveDate) -> GraceResult<BudgetOverview> {
        let transactions = self.storage.transactions().load()?;
        let goals = self.goals()?;

        Ok(BudgetOverview {
            summary: monthly_summary(&transactions, &goals, today),
            progress: goal_progress(&transactions, &goals, today),
            by_category: spend_by_category(&transactions, today),
        })
    }

    pub fn history(&self, today: NaiveDate, months: u32) -> GraceResult<Vec<(MonthCursor, Money)>> {
        let transactions = self.storage.transactions().load()?;
        Ok(monthly_totals(&transactions, today, months))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(units: i64, day: NaiveDate, category: FinanceCategory) -> Transaction {
        Transaction::new(Money::from_units(units), day, category, "")
    }

    fn goal(category: FinanceCategory, units: i64) -> BudgetGoal {
        BudgetGoal::new(category, Money::from_units(units))
    }

    #[test]
    fn test_summary_counts_only_budgeted_categories_this_month() {
        let today = date(2024, 3, 15);
        let transactions = vec![
            txn(1200, date(2024, 3, 1), FinanceCategory::Rent),
            txn(80, date(2024, 3, 10), FinanceCategory::Groceries),
            txn(50, date(2024, 3, 12), FinanceCategory::Other),
            txn(1200, date(2024, 2, 1), FinanceCategory::Rent),
            txn(1200, date(2023, 3, 1), FinanceCategory::Rent),
        ];
        let goals = vec![
            goal(FinanceCategory::Rent, 1200),
            goal(FinanceCategory::Groceries, 400),
        ];

        let summary = monthly_summary(&transactions, &goals, today).unwrap();
        assert_eq!(summary.total_budget, Money::from_units(1600));
        assert_eq!(summary.total_spent, Money::from_units(1280));
        assert_eq!(summary.remaining(), Money::from_units(320));
    }

    #[test]
    fn test_summary_none_without_budget() {
        let today = date(2024, 3, 15);
        let transactions = vec![txn(10, today, FinanceCategory::Rent)];
        assert!(monthly_summary(&transactions, &[], today).is_none());

        let zeros = vec![BudgetGoal::new(FinanceCategory::Rent, Money::zero())];
        assert!(monthly_summary(&transactions, &zeros, today).is_none());
    }

    #[test]
    fn test_summary_allows_overspend() {
        let today = date(2024, 3, 15);
        let transactions = vec![txn(500, today, FinanceCategory::Groceries)];
        let goals = vec![goal(FinanceCategory::Groceries, 400)];
        let summary = monthly_summary(&transactions, &goals, today).unwrap();
        assert!(summary.is_overspent());
        assert_eq!(summary.remaining(), Money::from_units(-100));
    }

    #[test]
    fn test_summary_saturates_on_huge_amounts() {
        let today = date(2024, 3, 15);
        let huge = Money::from_cents(4_611_686_018_427_388_000);
        let transactions = vec![
            Transaction::new(huge, today, FinanceCategory::Rent, ""),
            Transaction::new(huge, today, FinanceCategory::Rent, ""),
        ];
        let goals = vec![goal(FinanceCategory::Rent, 1200)];

        let summary = monthly_summary(&transactions, &goals, today).unwrap();
        assert_eq!(summary.total_spent, Money::from_cents(i64::MAX));
        assert!(summary.is_overspent());
        assert_eq!(spend_by_category(&transactions, today)[&FinanceCategory::Rent].cents(), i64::MAX);
    }

    #[test]
    fn test_spend_by_category_ignores_goals() {
        let today = date(2024, 3, 15);
        let transactions = vec![
            txn(20, date(2024, 3, 2), FinanceCategory::Transport),
            txn(30, date(2024, 3, 9), FinanceCategory::Transport),
            txn(40, date(2024, 3, 9), FinanceCategory::Groceries),
            txn(99, date(2024, 4, 1), FinanceCategory::Groceries),
        ];
        let spent = spend_by_category(&transactions, today);
        assert_eq!(spent[&FinanceCategory::Transport], Money::from_units(50));
        assert_eq!(spent[&FinanceCategory::Groceries], Money::from_units(40));
        assert!(!spent.contains_key(&FinanceCategory::Rent));
    }

    #[test]
    fn test_progress_full_goal_is_over_limit() {
        let progress = BudgetProgress::new(
            FinanceCategory::Rent,
            Money::from_units(1200),
            Money::from_units(1200),
        );
        assert_eq!(progress.fraction, 1.0);
        assert!(progress.over_limit);
        assert!(!progress.near_limit);
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_progress_thresholds() {
        let goal = Money::from_units(1200);

        let just_over = BudgetProgress::new(FinanceCategory::Rent, Money::from_units(1081), goal);
        assert!(just_over.over_limit);
        assert!(!just_over.near_limit);

        let near = BudgetProgress::new(FinanceCategory::Rent, Money::from_units(900), goal);
        assert!(near.near_limit);
        assert!(!near.over_limit);

        let exactly_seventy = BudgetProgress::new(FinanceCategory::Rent, Money::from_units(70), Money::from_units(100));
        assert!(!exactly_seventy.near_limit);

        let fine = BudgetProgress::new(FinanceCategory::Rent, Money::from_units(100), goal);
        assert!(!fine.near_limit && !fine.over_limit);
    }

    #[test]
    fn test_progress_caps_and_handles_zero_goal() {
        let capped = BudgetProgress::new(FinanceCategory::Debt, Money::from_units(300), Money::from_units(100));
        assert_eq!(capped.fraction, 1.0);

        let no_goal = BudgetProgress::new(FinanceCategory::Debt, Money::from_units(300), Money::zero());
        assert_eq!(no_goal.fraction, 0.0);
        assert!(!no_goal.over_limit);
    }

    #[test]
    fn test_goal_progress_defaults_to_zero_spend() {
        let today = date(2024, 3, 15);
        let goals = vec![goal(FinanceCategory::Tithe, 500)];
        let rows = goal_progress(&[], &goals, today);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].spent, Money::zero());
        assert_eq!(rows[0].fraction, 0.0);
    }

    #[test]
    fn test_monthly_totals_oldest_first() {
        let today = date(2024, 2, 10);
        let transactions = vec![
            txn(10, date(2023, 12, 5), FinanceCategory::Other),
            txn(20, date(2024, 2, 1), FinanceCategory::Other),
            txn(5, date(2024, 2, 9), FinanceCategory::Rent),
        ];
        let totals = monthly_totals(&transactions, today, 3);
        let got: Vec<(String, Money)> = totals.iter().map(|(c, m)| (c.to_string(), *m)).collect();
        assert_eq!(
            got,
            vec![
                ("2023-12".to_string(), Money::from_units(10)),
                ("2024-01".to_string(), Money::zero()),
                ("2024-02".to_string(), Money::from_units(25)),
            ]
        );
    }

    #[test]
    fn test_service_set_goals_replaces_wholesale() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage);

        service
            .set_goals(vec![goal(FinanceCategory::Rent, 1200), goal(FinanceCategory::Groceries, 400)])
            .unwrap();
        let saved = service
            .set_goals(vec![goal(FinanceCategory::Tithe, 300), goal(FinanceCategory::Rent, 0)])
            .unwrap();

        assert_eq!(saved, vec![goal(FinanceCategory::Tithe, 300)]);
        assert_eq!(service.goals().unwrap(), saved);
    }

    #[test]
    fn test_service_set_goal_and_clear() {
        let storage = Storage::in_memory();
        let service = BudgetService::new(&storage);

        service.set_goal(FinanceCategory::Rent, Money::from_units(1000)).unwrap();
        service.set_goal(FinanceCategory::Rent, Money::from_units(1100)).unwrap();
        let goals = service.set_goal(FinanceCategory::Debt, Money::from_units(50)).unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0], goal(FinanceCategory::Rent, 1100));

        service.clear().unwrap();
        assert!(service.goals().unwrap().is_empty());
        assert!(service.overview(date(2024, 1, 1)).unwrap().summary.is_none());
    }
}
