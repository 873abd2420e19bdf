//! Payflow CLI - your wallet in the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{balance, fund, login, logout, signup, transactions, verify};

/// Payflow - wallet payments in your terminal
#[derive(Parser)]
#[command(name = "pf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to your wallet
    Login {
        /// Account email address
        email: Option<String>,
        /// Password (prompted securely if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create a new account (interactive form)
    Signup,

    /// Request a password reset email
    ForgotPassword {
        /// Account email address
        email: String,
    },

    /// Verify a one-time password
    VerifyOtp {
        /// The OTP from your email or phone
        otp: String,
    },

    /// Submit a fund deposit
    Fund {
        /// Amount to deposit, e.g. 25.00
        amount: String,
        /// Optional note forwarded with the request
        #[arg(long)]
        note: Option<String>,
    },

    /// List transactions
    Transactions {
        /// Look up a single transaction by id
        #[arg(long)]
        id: Option<String>,
        /// User id (defaults to the logged-in session)
        #[arg(long)]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show wallet balance
    Balance {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget the stored session and clear cached responses
    Logout,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Login { email, password } => login::run(email, password),
        Commands::Signup => signup::run(),
        Commands::ForgotPassword { email } => verify::run_forgot_password(&email),
        Commands::VerifyOtp { otp } => verify::run_verify_otp(&otp),
        Commands::Fund { amount, note } => fund::run(&amount, note),
        Commands::Transactions { id, user, json } => transactions::run(id, user, json),
        Commands::Balance { json } => balance::run(json),
        Commands::Logout => logout::run(),
    }
}
