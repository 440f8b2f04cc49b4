//! Budget CLI commands
//!
//! Implements CLI commands for viewing and managing monthly budget goals.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_overview, money};
use crate::error::{GraceError, GraceResult};
use crate::i18n::Translator;
use crate::models::{FinanceCategory, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::today;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show this month's progress toward every goal
    Show,

    /// Set the monthly goal for a category (0 removes it)
    Set {
        /// Category name
        category: String,
        /// Monthly goal (e.g., "1200" or "1200.00")
        amount: String,
    },

    /// Remove every budget goal
    Clear,
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, settings: &Settings, cmd: BudgetCommands) -> GraceResult<()> {
    let service = BudgetService::new(storage);
    let t = Translator::new(settings.language);

    match cmd {
        BudgetCommands::Show => {
            let overview = service.overview(today())?;
            print!("{}", format_budget_overview(&overview, &t, settings.currency));
        }

        BudgetCommands::Set { category, amount } => {
            let category: FinanceCategory = category.parse()?;
            let amount = Money::parse(&amount).map_err(|e| {
                GraceError::Validation(format!(
                    "Invalid amount format: '{}'. Use format like '1200.00' or '1200'. Error: {}",
                    amount, e
                ))
            })?;
            if amount.is_negative() {
                return Err(GraceError::Validation("Budget goal cannot be negative".into()));
            }

            service.set_goal(category, amount)?;

            let label = t.t(category.translation_key());
            if amount.is_zero() {
                println!("Removed budget goal for {}", label);
            } else {
                println!("{}: {} = {}", t.t("budget_goal"), label, money(amount, settings.currency));
            }
        }

        BudgetCommands::Clear => {
            service.clear()?;
            println!("{}", t.t("no_budgets_set"));
        }
    }

    Ok(())
}
