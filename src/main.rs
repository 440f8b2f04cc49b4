use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gracehome::cli::{
    handle_audit_command, handle_budget_command, handle_calendar_command, handle_dashboard_command,
    handle_devotional_command, handle_finance_command, handle_settings_command, handle_shopping_command,
};
use gracehome::config::{GracePaths, Settings};
use gracehome::storage::Storage;

/// Environment variable holding the log filter (e.g. `debug`, `gracehome=trace`)
const LOG_ENV: &str = "GRACEHOME_LOG";

#[derive(Parser)]
#[command(
    name = "gracehome",
    version,
    about = "Household organizer for families",
    long_about = "GraceHome keeps a family's finances, budget goals, calendar, \
                  shopping list and devotional study in one place, right from \
                  the command line."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = gracehome::config::paths::DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the greeting, today's verse, budget and upcoming events
    #[command(alias = "home")]
    Dashboard,

    /// Transaction commands
    #[command(subcommand, alias = "fin")]
    Finance(gracehome::cli::FinanceCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Budget(gracehome::cli::BudgetCommands),

    /// Calendar commands
    #[command(subcommand, alias = "cal")]
    Calendar(gracehome::cli::CalendarCommands),

    /// Shopping list commands
    #[command(subcommand, alias = "shop")]
    Shopping(gracehome::cli::ShoppingCommands),

    /// Devotional study commands
    #[command(subcommand)]
    Devotional(gracehome::cli::DevotionalCommands),

    /// Settings commands
    #[command(subcommand)]
    Settings(gracehome::cli::SettingsCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => GracePaths::with_base_dir(dir),
        None => GracePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::open(&paths)?;

    match cli.command {
        Some(Commands::Dashboard) | None => {
            handle_dashboard_command(&storage, &settings)?;
        }
        Some(Commands::Finance(cmd)) => {
            handle_finance_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Calendar(cmd)) => {
            handle_calendar_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Shopping(cmd)) => {
            handle_shopping_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Devotional(cmd)) => {
            handle_devotional_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("GraceHome Configuration");
            println!("=======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Name:        {}", settings.user_name);
            println!("  Language:    {}", settings.language.code());
            println!("  Currency:    {}", settings.currency.code());
            println!("  Theme:       {}", settings.theme);
            println!("  Verse model: {}", settings.verse_model);
        }
    }

    Ok(())
}
