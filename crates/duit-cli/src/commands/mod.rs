//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `add` - Record a transaction via the extraction pipeline
//! - `transactions` - Listing and history reset
//! - `summary` - Aggregate snapshot display
//! - `insights` - AI financial insights

pub mod add;
pub mod insights;
pub mod summary;
pub mod transactions;

// Re-export command functions for main.rs
pub use add::*;
pub use insights::*;
pub use summary::*;
pub use transactions::*;

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::store::Store;

/// Resolve the store from `--store` or the platform default
pub fn open_store(path: Option<PathBuf>) -> Result<Store> {
    let path = match path {
        Some(path) => path,
        None => Store::default_path()?,
    };
    debug!(store = %path.display(), "Using transaction store");
    Ok(Store::new(path))
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
