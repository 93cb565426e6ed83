use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::auth::PASSWORD_ENV;
use expense_tracker::cli::{
    handle_add, handle_breakdown, handle_export, handle_list, handle_register, LoginArgs, Shell,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Single-user expense tracker",
    long_about = "Track dated expenses by category. Records are kept in a plain \
                  comma-separated file; users log in against a local users file. \
                  Passwords in that file are stored unencrypted."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Username
        username: String,
        /// Password (prompted for if not given)
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },

    /// Add an expense and save it
    Add {
        /// Date of the expense (YYYY-MM-DD, not validated)
        date: String,
        /// Category name
        category: String,
        /// Amount, e.g. "12.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[command(flatten)]
        login: LoginArgs,
    },

    /// List all expenses with the running total
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Show category-wise totals
    Breakdown {
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Export expenses as csv, json or yaml
    Export {
        /// Output format
        format: String,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        login: LoginArgs,
    },

    /// Start an interactive session
    Shell,

    /// Show current configuration and paths, writing a default config file if none exists
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone(), &settings)?;

    match cli.command {
        Some(Commands::Register { username, password }) => {
            handle_register(&storage, &username, password)?;
        }
        Some(Commands::Add {
            date,
            category,
            amount,
            login,
        }) => {
            handle_add(&storage, &settings, login, &date, &category, &amount)?;
        }
        Some(Commands::List { login }) => {
            handle_list(&storage, &settings, login)?;
        }
        Some(Commands::Breakdown { login }) => {
            handle_breakdown(&storage, &settings, login)?;
        }
        Some(Commands::Export {
            format,
            output,
            login,
        }) => {
            handle_export(&storage, login, &format, output)?;
        }
        Some(Commands::Shell) => {
            let stdin = io::stdin();
            let hide = stdin.is_terminal();
            Shell::new(&storage, &settings, stdin.lock(), io::stdout())
                .hide_passwords(hide)
                .run()?;
        }
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Users file:     {}", paths.users_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Atomic save:     {}", settings.atomic_save);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("Expense Tracker");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses shell' to start an interactive session.");
        }
    }

    Ok(())
}
