//! Mortgage CLI - Command Line Amortization Estimates
//!
//! This is the operational entry point for the mortgage amortization
//! workspace, standing in for the original form layer.
//!
//! # Commands
//!
//! - `mortgage schedule` - Full month-by-month amortization table
//! - `mortgage totals` - Summary totals only
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate gathers loan
//! parameters from flags, invokes the calculator in `mortgage_models`,
//! and renders the result as a table or JSON.

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Mortgage Amortization Calculator CLI
#[derive(Parser)]
#[command(name = "mortgage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Loan parameters shared by every command.
#[derive(Args)]
pub struct LoanArgs {
    /// Property price in currency units
    #[arg(short, long)]
    pub price: f64,

    /// Annual nominal interest rate in percent
    #[arg(short, long)]
    pub rate: f64,

    /// Loan duration in years (fractional years allowed)
    #[arg(short, long)]
    pub years: f64,

    /// Explicit down payment in currency units
    #[arg(short, long, conflicts_with = "down_percent")]
    pub down: Option<f64>,

    /// Down payment as a percentage of the price (used when --down is absent)
    #[arg(long, default_value = "15")]
    pub down_percent: f64,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full month-by-month amortization table
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,
    },

    /// Print summary totals only
    Totals {
        #[command(flatten)]
        loan: LoanArgs,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Schedule { loan } => commands::schedule::run(&loan),
        Commands::Totals { loan } => commands::totals::run(&loan),
    }
}
