use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Once;

use pocket_ledger::cli::{
    handle_audit_command, handle_expense_command, handle_export_command, handle_income_command,
    handle_insights_command, handle_period_command, handle_spending_command,
    handle_summary_command, handle_transfer_command, OutputFormat,
};
use pocket_ledger::config::paths::{LedgerPaths, DATA_DIR_ENV};
use pocket_ledger::config::settings::Settings;
use pocket_ledger::engine::CyclePolicy;
use pocket_ledger::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "pocket",
    version,
    about = "Multi-account income and expense ledger",
    long_about = "pocket-ledger tracks income, expenses and transfers across your \
                  accounts and summarises each billing period (27th to 26th). \
                  Expenses an account cannot cover are refused."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new ledger
    Init,

    /// Show current configuration and paths
    Config {
        /// Switch the period policy (billing-cycle or calendar-month)
        #[arg(long)]
        cycle: Option<String>,
    },

    /// Income commands
    #[command(subcommand)]
    Income(pocket_ledger::cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(pocket_ledger::cli::ExpenseCommands),

    /// Transfer commands
    #[command(subcommand)]
    Transfer(pocket_ledger::cli::TransferCommands),

    /// Show the period summary
    Summary {
        /// Period (current, last, a date, YYYY-MM or START..END)
        #[arg(short, long)]
        period: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show spending by category
    Spending {
        /// Period (current, last, a date, YYYY-MM or START..END)
        #[arg(short, long)]
        period: Option<String>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the period containing a date
    Period {
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// List the last N periods instead
        #[arg(short, long, conflicts_with = "date")]
        recent: Option<usize>,
    },

    /// Build a savings-insights request for the period
    Insights {
        /// Fraction of income to save, between 0 and 1
        #[arg(short, long)]
        target_rate: f64,

        /// Period (current, last, a date, YYYY-MM or START..END)
        #[arg(short, long)]
        period: Option<String>,

        /// Print the request as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export commands
    #[command(subcommand)]
    Export(pocket_ledger::cli::ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

static TRACING_INIT: Once = Once::new();

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    let today = chrono::Local::now().date_naive();
    tracing::debug!(base_dir = %paths.base_dir().display(), %today, "starting");

    let Some(command) = cli.command else {
        println!("pocket-ledger - income, expense and transfer tracking");
        println!();
        println!("Run 'pocket init' to create a ledger.");
        println!("Run 'pocket --help' for usage information.");
        return Ok(());
    };

    if let Commands::Init = command {
        println!("Initializing pocket-ledger at: {}", paths.base_dir().display());
        initialize_storage(&paths, &settings)?;
        println!("Initialization complete!");
        println!();
        println!("Accounts: {}", settings.accounts.join(", "));
        println!(
            "{} expense categories, cash withdrawals booked under '{}'",
            settings.expense_categories.len(),
            settings.cash_withdrawal_category
        );
        println!();
        println!("Edit {} to change them.", paths.settings_file().display());
        return Ok(());
    }

    if let Commands::Config { cycle } = &command {
        if let Some(cycle) = cycle {
            let policy = CyclePolicy::parse(cycle).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown cycle policy '{}'. Use billing-cycle or calendar-month",
                    cycle
                )
            })?;
            if !paths.is_initialized() {
                anyhow::bail!(
                    "No ledger found at {}. Run 'pocket init' first.",
                    paths.base_dir().display()
                );
            }
            settings.cycle_policy = policy;
            settings.save(&paths)?;
            tracing::info!(%policy, "cycle policy changed");
            println!("Cycle policy set to {}", policy);
            println!();
        }

        println!("pocket-ledger Configuration");
        println!("===========================");
        println!("Base directory: {}", paths.base_dir().display());
        println!("Data directory: {}", paths.data_dir().display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!("Audit log:      {}", paths.audit_log().display());
        println!("Initialized:    {}", paths.is_initialized());
        println!();
        println!("Settings:");
        println!("  Cycle policy:     {}", settings.cycle_policy);
        println!("  Currency symbol:  {:?}", settings.currency_symbol);
        println!("  Date format:      {}", settings.date_format);
        println!("  Accounts:         {}", settings.accounts.join(", "));
        println!("  Categories:       {}", settings.expense_categories.len());
        println!("  Cash withdrawals: {}", settings.cash_withdrawal_category);
        return Ok(());
    }

    if let Commands::Period { date, recent } = &command {
        handle_period_command(&settings, today, date.as_deref(), *recent)?;
        return Ok(());
    }

    if !paths.is_initialized() {
        anyhow::bail!(
            "No ledger found at {}. Run 'pocket init' first.",
            paths.base_dir().display()
        );
    }

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match command {
        Commands::Income(cmd) => handle_income_command(&storage, &settings, today, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, today, cmd)?,
        Commands::Transfer(cmd) => handle_transfer_command(&storage, &settings, today, cmd)?,
        Commands::Summary { period, output } => {
            handle_summary_command(&storage, &settings, today, period.as_deref(), output)?
        }
        Commands::Spending { period, top, output } => handle_spending_command(
            &storage,
            &settings,
            today,
            period.as_deref(),
            top,
            output,
        )?,
        Commands::Insights {
            target_rate,
            period,
            json,
        } => handle_insights_command(
            &storage,
            &settings,
            today,
            period.as_deref(),
            target_rate,
            json,
        )?,
        Commands::Export(cmd) => handle_export_command(&storage, &settings, today, cmd)?,
        Commands::Audit { limit } => handle_audit_command(&storage, limit)?,
        Commands::Init | Commands::Config { .. } | Commands::Period { .. } => {}
    }

    Ok(())
}
