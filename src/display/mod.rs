//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, progress bars, and the month grid. Every label is looked
//! up through the active [`Translator`](crate::i18n::Translator).

pub mod calendar;
pub mod dashboard;
pub mod devotional;
pub mod finance;
pub mod shopping;

pub use calendar::{format_event_details, format_event_list, format_month_grid};
pub use dashboard::format_dashboard;
pub use devotional::{format_score, format_study};
pub use finance::{format_budget_overview, format_history, format_transaction_details, format_transaction_table};
pub use shopping::format_shopping_list;

use tabled::{builder::Builder, settings::Style};

use crate::config::Currency;
use crate::models::Money;

/// Render rows under a header as a table
pub(crate) fn table<I, R>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut builder = Builder::default();
    builder.push_record(header.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table.to_string()
}

/// Amount with the configured currency symbol
pub fn money(amount: Money, currency: Currency) -> String {
    amount.format_with_symbol(currency.symbol())
}

/// Fixed-width bar for a fraction in [0, 1]
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
