//! duit CLI - AI-assisted expense tracker
//!
//! Usage:
//!   duit add "Makan di McD 50rb"       Record from free text
//!   duit add --attach struk.jpg        Record from a receipt image
//!   duit transactions --limit 10       List recent transactions
//!   duit summary                       Totals and category breakdown
//!   duit insights                      AI advice over recent history
//!
//! Requires GEMINI_API_KEY for `add` and `insights`.

mod cli;
mod commands;
mod store;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let store = commands::open_store(cli.store)?;

    match cli.command {
        Commands::Add { text, attach } => {
            commands::cmd_add(&store, &text, attach.as_deref()).await
        }
        Commands::Transactions { limit } => commands::cmd_transactions_list(&store, limit),
        Commands::Summary => commands::cmd_summary(&store),
        Commands::Insights => commands::cmd_insights(&store).await,
        Commands::Reset { yes } => commands::cmd_reset(&store, yes),
    }
}
