//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// duit - Record transactions from free text or receipts, with AI insights
#[derive(Parser)]
#[command(name = "duit")]
#[command(about = "AI-assisted expense tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transaction store path (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a transaction from free text and/or a receipt
    Add {
        /// Free-text description (e.g. "Makan di McD 50rb")
        text: Vec<String>,

        /// Receipt image or PDF to attach
        #[arg(short, long)]
        attach: Option<PathBuf>,
    },

    /// List recorded transactions, newest first
    Transactions {
        /// Maximum number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show income/expense totals and the category breakdown
    Summary,

    /// Ask the model for financial insights over recent history
    Insights,

    /// Delete the whole transaction history
    Reset {
        /// Skip the confirmation hint
        #[arg(long)]
        yes: bool,
    },
}
