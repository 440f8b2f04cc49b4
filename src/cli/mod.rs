//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod calendar;
pub mod dashboard;
pub mod devotional;
pub mod finance;
pub mod settings;
pub mod shopping;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use calendar::{handle_calendar_command, CalendarCommands};
pub use dashboard::handle_dashboard_command;
pub use devotional::{handle_devotional_command, DevotionalCommands};
pub use finance::{handle_finance_command, FinanceCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use shopping::{handle_shopping_command, ShoppingCommands};

use chrono::{Local, NaiveDate};

use crate::error::{GraceError, GraceResult};
use crate::models::Money;

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(input: &str) -> GraceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        GraceError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD format.",
            input
        ))
    })
}

/// Parse an optional date argument, defaulting to today
pub fn parse_date_or_today(input: Option<&str>) -> GraceResult<NaiveDate> {
    input.map(parse_date).unwrap_or_else(|| Ok(today()))
}

/// Parse an amount argument that must be greater than zero
pub fn parse_positive_amount(input: &str) -> GraceResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        GraceError::Validation(format!(
            "Invalid amount '{}'. Use a format like '12.50' or '12'. Error: {}",
            input, e
        ))
    })?;
    if !amount.is_positive() {
        return Err(GraceError::Validation(format!(
            "Amount must be greater than zero (got {})",
            input
        )));
    }
    Ok(amount)
}
