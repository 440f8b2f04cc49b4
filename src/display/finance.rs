//! Finance display formatting
//!
//! Transaction tables, budget progress and the spending history chart.

use crate::config::Currency;
use crate::i18n::{format_placeholders, Translator};
use crate::models::{Money, Transaction};
use crate::services::budget::BudgetOverview;
use crate::services::MonthCursor;

use super::{money, progress_bar, table};

const BAR_WIDTH: usize = 20;

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[Transaction], t: &Translator, currency: Currency) -> String {
    if transactions.is_empty() {
        return format!("{}\n", t.t("no_transactions"));
    }

    let header = [t.t("id"), t.t("date"), t.t("category"), t.t("amount"), t.t("notes")];
    let rows = transactions.iter().map(|txn| {
        vec![
            txn.id.to_string(),
            txn.date.format("%Y-%m-%d").to_string(),
            t.t(txn.category.translation_key()).to_string(),
            money(txn.amount, currency),
            txn.notes.clone(),
        ]
    });

    let mut output = format!("{}\n", t.t("recent_transactions"));
    output.push_str(&table(&header, rows));
    output.push('\n');
    output
}

/// Format a single transaction
pub fn format_transaction_details(txn: &Transaction, t: &Translator, currency: Currency) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:12} {}\n", t.t("id"), txn.id));
    output.push_str(&format!("{:12} {}\n", t.t("date"), txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("{:12} {}\n", t.t("category"), t.t(txn.category.translation_key())));
    output.push_str(&format!("{:12} {}\n", t.t("amount"), money(txn.amount, currency)));
    if !txn.notes.is_empty() {
        output.push_str(&format!("{:12} {}\n", t.t("notes"), txn.notes));
    }
    output
}

/// Format the month's budget summary and per-goal progress
pub fn format_budget_overview(overview: &BudgetOverview, t: &Translator, currency: Currency) -> String {
    let mut output = format!("{}\n", t.t("monthly_budgets"));
    output.push_str(&"=".repeat(60));
    output.push('\n');

    let Some(summary) = overview.summary else {
        output.push_str(t.t("no_budgets_set"));
        output.push('\n');
        output.push_str(t.t("add_first_budget"));
        output.push('\n');
        return output;
    };

    let spent = money(summary.total_spent, currency);
    let total = money(summary.total_budget, currency);
    output.push_str(&format!(
        "{}: {}\n",
        t.t("total_spent_vs_budgeted"),
        format_placeholders(t.t("spent_of"), &[("spent", spent.as_str()), ("total", total.as_str())])
    ));
    output.push_str(&format!("{}: {}\n\n", t.t("remaining"), money(summary.remaining(), currency)));

    let header = [t.t("category"), t.t("spent"), t.t("budget_goal"), "", "%", ""];
    let rows = overview.progress.iter().map(|p| {
        let flag = if p.over_limit {
            t.t("over_limit")
        } else if p.near_limit {
            t.t("near_limit")
        } else {
            ""
        };
        vec![
            t.t(p.category.translation_key()).to_string(),
            money(p.spent, currency),
            money(p.goal, currency),
            progress_bar(p.fraction, BAR_WIDTH),
            format!("{}%", p.percent()),
            flag.to_string(),
        ]
    });
    output.push_str(&table(&header, rows));
    output.push('\n');
    output
}

/// Format monthly spending totals as a bar chart, oldest first
pub fn format_history(totals: &[(MonthCursor, Money)], t: &Translator, currency: Currency) -> String {
    let mut output = format!("{}\n", t.t("spending_history"));
    let peak = totals.iter().map(|(_, m)| *m).max().unwrap_or_default();

    for (cursor, total) in totals {
        let fraction = total.ratio_of(peak).unwrap_or(0.0);
        output.push_str(&format!(
            "{}  {} {:>12}\n",
            cursor,
            progress_bar(fraction, BAR_WIDTH),
            money(*total, currency)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::models::{BudgetGoal, FinanceCategory};
    use crate::services::budget::{goal_progress, monthly_summary, spend_by_category};
    use chrono::NaiveDate;

    fn english() -> Translator {
        Translator::new(Language::En)
    }

    #[test]
    fn test_empty_transaction_table() {
        assert_eq!(format_transaction_table(&[], &english(), Currency::Usd), "No Transactions Yet\n");
    }

    #[test]
    fn test_transaction_table_translates_category() {
        let txn = Transaction::new(
            Money::from_units(500),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            FinanceCategory::Tithe,
            "Church tithe",
        );
        let out = format_transaction_table(&[txn], &Translator::new(Language::Sv), Currency::Sek);
        assert!(out.contains("Tionde"));
        assert!(out.contains("kr500.00"));
        assert!(out.contains("Church tithe"));
    }

    #[test]
    fn test_budget_overview_flags_over_limit() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let transactions = vec![Transaction::new(Money::from_units(1200), today, FinanceCategory::Rent, "")];
        let goals = vec![BudgetGoal::new(FinanceCategory::Rent, Money::from_units(1200))];
        let overview = BudgetOverview {
            summary: monthly_summary(&transactions, &goals, today),
            progress: goal_progress(&transactions, &goals, today),
            by_category: spend_by_category(&transactions, today),
        };

        let out = format_budget_overview(&overview, &english(), Currency::Usd);
        assert!(out.contains("$1200.00 of $1200.00"));
        assert!(out.contains("Over limit"));
        assert!(out.contains("100%"));
    }

    #[test]
    fn test_budget_overview_empty_state() {
        let overview = BudgetOverview {
            summary: None,
            progress: Vec::new(),
            by_category: Default::default(),
        };
        let out = format_budget_overview(&overview, &english(), Currency::Usd);
        assert!(out.contains("No Budgets Set"));
    }
}
