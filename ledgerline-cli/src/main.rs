//! Ledgerline CLI - the banking demo in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{accounts, language, login, logout, transactions, transfer, whoami};

/// Ledgerline - banking demo in your terminal
#[derive(Parser)]
#[command(name = "ll", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with the demo credentials
    Login {
        /// Email address (prompted when omitted)
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and clear the stored session
    Logout,

    /// Show the signed-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List accounts and balances
    Accounts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the transaction table
    Transactions {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Rows per page
        #[arg(long, default_value_t = 10)]
        page_size: usize,
        /// Free-text search over concept and merchant
        #[arg(long)]
        search: Option<String>,
        /// Status filter: all, pending, confirmed, failed
        #[arg(long, default_value = "all")]
        status: String,
        /// Earliest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Sort field: date or amount
        #[arg(long, default_value = "date")]
        sort: String,
        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        dir: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a simulated transfer between two accounts
    Transfer {
        /// Source account id
        #[arg(long)]
        from: String,
        /// Destination account id
        #[arg(long)]
        to: String,
        /// Amount in the source account's currency
        #[arg(long)]
        amount: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show or set the preferred display language
    Language {
        /// Language code to switch to (prints the current one when omitted)
        code: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { email, password } => login::run(email, password).await,
        Commands::Logout => logout::run(),
        Commands::Whoami { json } => whoami::run(json),
        Commands::Accounts { json } => accounts::run(json).await,
        Commands::Transactions {
            page,
            page_size,
            search,
            status,
            from,
            to,
            sort,
            dir,
            json,
        } => transactions::run(page, page_size, search, &status, from, to, &sort, &dir, json).await,
        Commands::Transfer {
            from,
            to,
            amount,
            yes,
        } => transfer::run(&from, &to, &amount, yes).await,
        Commands::Language { code } => language::run(code),
    }
}
