use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spendlens::cli::{
    handle_budget_command, handle_category_command, handle_export_command, handle_report_command,
    handle_transaction_command, BudgetCommands, CategoryCommands, ExportCommands, ReportCommands,
    TransactionCommands,
};
use spendlens::config::{paths::SpendlensPaths, settings::Settings};
use spendlens::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendlens",
    version,
    about = "Local personal finance tracker",
    long_about = "spendlens records your income and expenses, tracks monthly \
                  budgets per category, and summarizes where your money goes \
                  with charts-as-text and simple insights."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports computed from your data
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory with default categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("spendlens=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    // One "today" for the whole invocation
    let today = chrono::Local::now().date_naive();

    // Initialize paths and settings
    let paths = SpendlensPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing spendlens at: {}", paths.base_dir().display());
            spendlens::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created:");
            println!("  - Expense: Food & Dining, Transportation, Shopping, Entertainment,");
            println!("             Bills & Utilities, Healthcare, Education, Travel, Other Expenses");
            println!("  - Income:  Salary, Freelance, Investments, Other Income");
            println!();
            println!("Run 'spendlens category list' to see all categories.");
        }
        Some(Commands::Config) => {
            println!("spendlens Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Recent count:    {}", settings.recent_count);
        }
        None => {
            println!("spendlens - Local personal finance tracker");
            println!();
            println!("Run 'spendlens --help' for usage information.");
            println!("Run 'spendlens report dashboard' for an overview.");
        }
    }

    Ok(())
}
