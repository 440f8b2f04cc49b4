//! Finance CLI commands
//!
//! Implements CLI commands for recording transactions and reviewing
//! spending.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_history, format_transaction_details, format_transaction_table, money, table};
use crate::error::GraceResult;
use crate::i18n::Translator;
use crate::models::FinanceCategory;
use crate::services::{BudgetService, CreateTransactionInput, MonthCursor, TransactionService, TransactionUpdate};
use crate::storage::Storage;

use super::{parse_date, parse_date_or_today, parse_positive_amount, today};

/// Finance subcommands
#[derive(Subcommand)]
pub enum FinanceCommands {
    /// Record a new transaction
    Add {
        /// Amount spent (e.g., "45.50")
        amount: String,
        /// Category (tithe, offering, first_fruits, rent, insurance, debt, transport, groceries, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
    /// List transactions, newest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show this month's spending per category
    Summary,
    /// Show total spending for recent months
    History {
        /// Number of months to show
        #[arg(short, long, default_value = "6")]
        months: u32,
    },
}

/// Handle a finance command
pub fn handle_finance_command(storage: &Storage, settings: &Settings, cmd: FinanceCommands) -> GraceResult<()> {
    let service = TransactionService::new(storage);
    let t = Translator::new(settings.language);
    let currency = settings.currency;

    match cmd {
        FinanceCommands::Add {
            amount,
            category,
            date,
            notes,
        } => {
            let input = CreateTransactionInput {
                amount: parse_positive_amount(&amount)?,
                date: parse_date_or_today(date.as_deref())?,
                category: category.parse()?,
                notes,
            };
            let txn = service.create(input)?;

            println!("{}", t.t("add_transaction"));
            print!("{}", format_transaction_details(&txn, &t, currency));
        }

        FinanceCommands::Edit {
            id,
            amount,
            category,
            date,
            notes,
        } => {
            let update = TransactionUpdate {
                amount: amount.as_deref().map(parse_positive_amount).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                category: category.as_deref().map(str::parse::<FinanceCategory>).transpose()?,
                notes,
            };
            let txn = service.update(&id, update)?;

            println!("{}", t.t("edit_transaction"));
            print!("{}", format_transaction_details(&txn, &t, currency));
        }

        FinanceCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!("Deleted transaction {} ({})", txn.id, money(txn.amount, currency));
        }

        FinanceCommands::List {
            month,
            category,
            limit,
        } => {
            let month: Option<MonthCursor> = month.as_deref().map(str::parse).transpose()?;
            let category: Option<FinanceCategory> = category.as_deref().map(str::parse).transpose()?;

            let mut transactions = service.list_filtered(month.map(|m| m.first_day()), category)?;
            transactions.truncate(limit);

            print!("{}", format_transaction_table(&transactions, &t, currency));
        }

        FinanceCommands::Summary => {
            let today = today();
            let overview = BudgetService::new(storage).overview(today)?;
            println!("{} ({})", t.t("finances"), MonthCursor::containing(today));

            if overview.by_category.is_empty() {
                println!("{}", t.t("no_transactions"));
            } else {
                let rows = overview.by_category.iter().map(|(category, amount)| {
                    vec![
                        t.t(category.translation_key()).to_string(),
                        money(*amount, currency),
                    ]
                });
                println!("{}", table(&[t.t("category"), t.t("spent")], rows));
            }

            match overview.summary {
                Some(summary) => println!(
                    "{}: {} / {}",
                    t.t("total_spent_vs_budgeted"),
                    money(summary.total_spent, currency),
                    money(summary.total_budget, currency)
                ),
                None => println!("{}", t.t("no_budget_set")),
            }
        }

        FinanceCommands::History { months } => {
            let totals = BudgetService::new(storage).history(today(), months.max(1))?;
            print!("{}", format_history(&totals, &t, currency));
        }
    }

    Ok(())
}
