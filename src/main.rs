use anyhow::Result;
use clap::{Parser, Subcommand};

use budgets::cli::{
    handle_budget_command, handle_data_command, handle_expense_command, handle_month_command,
    handle_overview_command, handle_settings_command, handle_sync_command, Session,
};
use budgets::config::{AppConfig, BudgetsPaths};
use budgets::logging::init_logging;
use budgets::services::{DataLayer, LoadOptions};
use budgets::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budgets",
    version,
    about = "Terminal-based monthly budgets and expenses tracker",
    long_about = "Track what you spend each month against simple named budgets. \
                  Everything is stored locally as JSON and can be exported or \
                  imported at any time."
)]
struct Cli {
    /// Answer "yes" to every confirmation
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month's expenses and budgets
    Overview {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(budgets::cli::BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(budgets::cli::ExpenseCommands),

    /// Move between months
    #[command(subcommand)]
    Month(budgets::cli::MonthCommands),

    /// Currency and other settings
    #[command(subcommand)]
    Settings(budgets::cli::SettingsCommands),

    /// Sync token, forced reload and deleting all data
    #[command(subcommand)]
    Sync(budgets::cli::SyncCommands),

    /// Import and export
    #[command(subcommand)]
    Data(budgets::cli::DataCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetsPaths::new()?;
    let config = AppConfig::load_or_default(&paths)?;
    init_logging(&config.log_filter)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_data(LoadOptions::default())?;

    let mut session = Session::new(storage, config, cli.yes);

    match cli.command {
        Some(Commands::Overview { month }) => {
            handle_overview_command(&mut session, month.as_deref())?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut session, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut session, cmd)?;
        }
        Some(Commands::Month(cmd)) => {
            handle_month_command(&mut session, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut session, cmd)?;
        }
        Some(Commands::Sync(cmd)) => {
            handle_sync_command(&mut session, cmd)?;
        }
        Some(Commands::Data(cmd)) => {
            handle_data_command(&mut session, cmd)?;
        }
        Some(Commands::Config) => {
            println!("budgets-cli Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Config file:     {}", paths.config_file().display());
            println!();
            println!("Settings:");
            println!("  Log filter:           {}", session.config.log_filter);
            println!(
                "  Default budget value: {}",
                session.config.default_budget_value.to_input_string()
            );
            println!("  Date format:          {}", session.config.date_format);
        }
        None => {
            handle_overview_command(&mut session, None)?;
        }
    }

    Ok(())
}
