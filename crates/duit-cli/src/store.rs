//! JSON file store for the transaction collection
//!
//! Read on startup, written after every accepted mutation. The stored form
//! is the serialized collection itself; a missing file is an empty history.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use duit_core::TransactionCollection;

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store location under the platform data directory
    /// (~/.local/share/duit on Linux)
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir().context("no platform data directory available")?;
        Ok(base.join("duit").join("transactions.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<TransactionCollection> {
        if !self.path.exists() {
            return Ok(TransactionCollection::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse {}", self.path.display()))
    }

    pub fn save(&self, collection: &TransactionCollection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(collection)?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}
