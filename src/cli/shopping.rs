//! Shopping list CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_shopping_list;
use crate::error::GraceResult;
use crate::i18n::Translator;
use crate::services::{ItemUpdate, ShoppingService};
use crate::storage::Storage;

/// Shopping subcommands
#[derive(Subcommand)]
pub enum ShoppingCommands {
    /// Add an item to the list
    Add {
        /// Item name
        name: String,
        /// Quantity (defaults to 1)
        #[arg(short, long)]
        quantity: Option<u32>,
        /// Category (defaults to "General")
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Mark an item purchased, or back to active
    Toggle {
        /// Item ID
        id: String,
    },
    /// Edit an item
    Edit {
        /// Item ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        quantity: Option<u32>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Remove an item
    Delete {
        /// Item ID
        id: String,
    },
    /// Show the list
    List,
}

/// Handle a shopping command
pub fn handle_shopping_command(storage: &Storage, settings: &Settings, cmd: ShoppingCommands) -> GraceResult<()> {
    let service = ShoppingService::new(storage);
    let t = Translator::new(settings.language);

    match cmd {
        ShoppingCommands::Add {
            name,
            quantity,
            category,
        } => {
            let item = service.add(&name, quantity, category.as_deref())?;
            println!("{}: {} x{} ({})", t.t("add_item"), item.name, item.quantity, item.id);
        }

        ShoppingCommands::Toggle { id } => {
            let item = service.toggle(&id)?;
            let state = if item.purchased { t.t("purchased_items") } else { t.t("to_buy") };
            println!("{} -> {}", item.name, state);
        }

        ShoppingCommands::Edit {
            id,
            name,
            quantity,
            category,
        } => {
            let item = service.edit(
                &id,
                ItemUpdate {
                    name,
                    quantity,
                    category,
                },
            )?;
            println!("{} x{} [{}] ({})", item.name, item.quantity, item.category, item.id);
        }

        ShoppingCommands::Delete { id } => {
            let item = service.delete(&id)?;
            println!("Removed {} from the list", item.name);
        }

        ShoppingCommands::List => {
            print!("{}", format_shopping_list(&service.list()?, &t));
        }
    }

    Ok(())
}
