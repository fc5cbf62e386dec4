//! Domain models for duit

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated transaction record
///
/// Created only by `RecordValidator` from a sanitized candidate and immutable
/// after creation. `amount` is a non-negative finite number in a
/// currency-agnostic unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Process-assigned, monotonic, timestamp-derived
    pub id: i64,
    pub merchant: String,
    pub amount: f64,
    pub date: NaiveDate,
    /// Free-form label; the suggested set is not enforced
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub summary: String,
}

/// Untrusted candidate object parsed from a model response
///
/// Deliberately distinct from `TransactionRecord`: the only way to turn a
/// candidate into a record is `RecordValidator::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate(serde_json::Map<String, Value>);

impl Candidate {
    pub fn new(fields: serde_json::Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a raw candidate field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_fields(self) -> serde_json::Map<String, Value> {
        self.0
    }
}

/// Ordered transaction history, newest-first by insertion order
///
/// Exclusively owned by the session that created it. Aggregation and the
/// insights requester only read it; the sole mutation path is appending a
/// validated record after a full extraction round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionCollection {
    records: Vec<TransactionRecord>,
}

impl TransactionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted record at the front (newest-first)
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.insert(0, record);
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// The `n` most recent records
    pub fn recent(&self, n: usize) -> &[TransactionRecord] {
        &self.records[..self.records.len().min(n)]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collection-wide reset
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl From<Vec<TransactionRecord>> for TransactionCollection {
    fn from(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }
}

/// Derived totals over a transaction collection
///
/// Never persisted; always recomputed from the current collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateSnapshot {
    pub total_income: f64,
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub balance: f64,
    /// Expense sum per category label
    pub category_totals: HashMap<String, f64>,
}
