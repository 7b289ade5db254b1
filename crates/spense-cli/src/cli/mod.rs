//! CLI entry and dispatch.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use spense_core::config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "spense")]
#[command(version)]
#[command(about = "Personal expense tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Register a new account and store the session token
    Register {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
    },

    /// Log out (clear the stored session token)
    Logout,

    /// Manage expenses
    Expenses {
        #[command(subcommand)]
        command: ExpenseCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ExpenseCommands {
    /// Lists all expenses
    List,
    /// Adds a new expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Expense category
        #[arg(long)]
        category: String,
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Monetary amount
        #[arg(long)]
        amount: f64,
    },
    /// Edits an existing expense in place
    Edit {
        /// The ID of the expense to edit
        #[arg(value_name = "EXPENSE_ID")]
        id: i64,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Deletes an expense
    Delete {
        /// The ID of the expense to delete
        #[arg(value_name = "EXPENSE_ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, &password).await
        }

        Commands::Register {
            email,
            password,
            first_name,
            last_name,
        } => commands::auth::register(&config, &email, &password, &first_name, &last_name).await,

        Commands::Logout => commands::auth::logout(),

        Commands::Expenses { command } => match command {
            ExpenseCommands::List => commands::expenses::list(&config).await,
            ExpenseCommands::Add {
                date,
                category,
                description,
                amount,
            } => commands::expenses::add(&config, date, category, description, amount).await,
            ExpenseCommands::Edit {
                id,
                date,
                category,
                description,
                amount,
            } => {
                let edits = commands::expenses::Edits {
                    date,
                    category,
                    description,
                    amount,
                };
                commands::expenses::edit(&config, id, edits).await
            }
            ExpenseCommands::Delete { id } => commands::expenses::delete(&config, id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
