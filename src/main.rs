use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::audit::AuditLogger;
use budget_tracker::cli::{
    handle_budget_command, handle_category_command, handle_expense_command,
    handle_history_command,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::display::format_budget_summary;
use budget_tracker::logging::init_tracing;
use budget_tracker::state::{BudgetStore, Dispatch};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal budget and expense tracker",
    long_about = "budget-tracker lets you define a spending ceiling, record \
                  expenses against it by category and see how much is left, \
                  from the command line or an interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Budget commands
    #[command(subcommand)]
    Budget(budget_tracker::cli::BudgetCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(budget_tracker::cli::ExpenseCommands),

    /// Category catalog commands
    #[command(subcommand)]
    Category(budget_tracker::cli::CategoryCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&paths)?;

    let mut store = BudgetStore::open(&paths)?;
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Tui) => {
            budget_tracker::tui::run_tui(store, settings, today)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut store, &settings, today, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&store, &settings, cmd)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&AuditLogger::new(paths.audit_log()), limit)?;
        }
        Some(Commands::Config) => {
            println!("budget-tracker configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("State file:       {}", paths.state_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Diagnostic log:   {}", paths.diagnostic_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Confirm reset:   {}", settings.confirm_reset);
        }
        None => {
            print!("{}", format_budget_summary(store.state(), &settings));
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
