//! Dashboard display formatting

use crate::config::Currency;
use crate::i18n::{format_placeholders, Translator};
use crate::services::dashboard::Dashboard;

use super::{money, progress_bar};

pub fn format_dashboard(dashboard: &Dashboard, t: &Translator, currency: Currency) -> String {
    let mut output = format!("{}\n\n", dashboard.greeting);

    output.push_str(&format!("{}\n", t.t("todays_verse")));
    output.push_str(&format!("  \"{}\"\n", dashboard.verse.text));
    if !dashboard.verse.reference.is_empty() {
        output.push_str(&format!("  {}\n", dashboard.verse.reference));
    }

    output.push_str(&format!("\n{}\n", t.t("budget_overview")));
    match dashboard.budget {
        Some(summary) => {
            let spent = money(summary.total_spent, currency);
            let total = money(summary.total_budget, currency);
            let fraction = summary.total_spent.ratio_of(summary.total_budget).unwrap_or(0.0);
            output.push_str(&format!("  {}\n", t.t("total_spent_vs_budgeted")));
            output.push_str(&format!(
                "  {} {}\n",
                progress_bar(fraction, 30),
                format_placeholders(t.t("spent_of"), &[("spent", spent.as_str()), ("total", total.as_str())])
            ));
        }
        None => output.push_str(&format!("  {}\n", t.t("no_budget_set"))),
    }

    output.push_str(&format!("\n{}\n", t.t("upcoming_events")));
    if dashboard.upcoming.is_empty() {
        output.push_str(&format!("  {}\n", t.t("no_events")));
    }
    for (date, event) in &dashboard.upcoming {
        output.push_str(&format!("  {}  {}\n", date.format("%a %Y-%m-%d"), event.name));
    }

    output
}
