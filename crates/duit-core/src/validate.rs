//! Candidate validation and repair
//!
//! The single gate between untrusted model output and the trusted data
//! model. Every field either has a defined repair or a defined failure;
//! nothing passes through unchecked.

use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Local, NaiveDate, Utc};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Candidate, TransactionRecord, TransactionType};

/// Monotonic, timestamp-derived record id source
///
/// Ids start from the millisecond clock and are bumped past the previous id
/// when two records are created within the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Validates sanitized candidates into transaction records
#[derive(Debug, Default)]
pub struct RecordValidator {
    ids: IdGenerator,
}

impl RecordValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a candidate into a record, or fail with `SchemaViolation`
    ///
    /// Field policy:
    /// - `amount`: number or numeric string, finite and non-negative
    /// - `type`: case-insensitive Income/Expense
    /// - `date`: YYYY-MM-DD; absent or unparsable repairs to today
    /// - `merchant`/`category`/`summary`: string coercion, default ""
    /// - `id`: assigned here, never sourced from the candidate
    pub fn validate(&self, candidate: Candidate) -> Result<TransactionRecord> {
        self.validate_with_today(candidate, Local::now().date_naive())
    }

    fn validate_with_today(
        &self,
        candidate: Candidate,
        today: NaiveDate,
    ) -> Result<TransactionRecord> {
        let amount = coerce_amount(candidate.get("amount"))?;
        let kind = coerce_type(candidate.get("type"))?;
        let date = coerce_date(candidate.get("date"), today);

        Ok(TransactionRecord {
            id: self.ids.next_id(),
            merchant: coerce_string(candidate.get("merchant")),
            amount,
            date,
            category: coerce_string(candidate.get("category")),
            kind,
            summary: coerce_string(candidate.get("summary")),
        })
    }
}

fn coerce_amount(value: Option<&Value>) -> Result<f64> {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            Error::SchemaViolation(format!("amount {} is not representable", n))
        })?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            Error::SchemaViolation(format!("amount \"{}\" is not numeric", s))
        })?,
        Some(other) => {
            return Err(Error::SchemaViolation(format!(
                "amount must be a number, got {}",
                other
            )))
        }
        None => return Err(Error::SchemaViolation("amount is missing".into())),
    };

    if !amount.is_finite() {
        return Err(Error::SchemaViolation("amount must be finite".into()));
    }
    if amount < 0.0 {
        return Err(Error::SchemaViolation(format!(
            "amount {} must be non-negative",
            amount
        )));
    }

    Ok(amount)
}

fn coerce_type(value: Option<&Value>) -> Result<TransactionType> {
    match value {
        Some(Value::String(s)) => TransactionType::from_str(s).map_err(Error::SchemaViolation),
        Some(other) => Err(Error::SchemaViolation(format!(
            "type must be \"Income\" or \"Expense\", got {}",
            other
        ))),
        None => Err(Error::SchemaViolation("type is missing".into())),
    }
}

/// Absent or unparsable dates repair to today; the extraction instruction
/// already requests this from the generator, but its output is not trusted.
fn coerce_date(value: Option<&Value>, today: NaiveDate) -> NaiveDate {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => {
            match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
                Ok(date) => date,
                Err(e) => {
                    debug!(date = %s, error = %e, "Unparsable date, defaulting to today");
                    today
                }
            }
        }
        _ => today,
    }
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(value: serde_json::Value) -> Candidate {
        match value {
            Value::Object(fields) => Candidate::new(fields),
            _ => panic!("test candidate must be an object"),
        }
    }

    #[test]
    fn test_valid_candidate() {
        let validator = RecordValidator::new();
        let record = validator
            .validate(candidate(json!({
                "merchant": "McD",
                "amount": 50000,
                "date": "2025-03-14",
                "category": "Food",
                "type": "Expense",
                "summary": "Makan"
            })))
            .unwrap();

        assert_eq!(record.merchant, "McD");
        assert_eq!(record.amount, 50000.0);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(record.kind, TransactionType::Expense);
    }

    #[test]
    fn test_string_amount_coerces_to_numeric() {
        let validator = RecordValidator::new();
        let record = validator
            .validate(candidate(json!({"amount": "50000", "type": "Expense"})))
            .unwrap();
        assert_eq!(record.amount, 50000.0);
    }

    #[test]
    fn test_non_numeric_amount_fails() {
        let validator = RecordValidator::new();
        let err = validator
            .validate(candidate(json!({"amount": "abc", "type": "Expense"})))
            .unwrap_err();
        assert!(matches!(err, Error::SchemaViolation(_)));
    }

    #[test]
    fn test_negative_amount_fails() {
        let validator = RecordValidator::new();
        let err = validator
            .validate(candidate(json!({"amount": -5.0, "type": "Expense"})))
            .unwrap_err();
        assert!(matches!(err, Error::SchemaViolation(_)));
    }

    #[test]
    fn test_missing_amount_fails() {
        let validator = RecordValidator::new();
        let err = validator
            .validate(candidate(json!({"type": "Income"})))
            .unwrap_err();
        assert!(matches!(err, Error::SchemaViolation(_)));
    }

    #[test]
    fn test_type_normalized_case_insensitively() {
        let validator = RecordValidator::new();
        let record = validator
            .validate(candidate(json!({"amount": 1, "type": "income"})))
            .unwrap();
        assert_eq!(record.kind, TransactionType::Income);

        let record = validator
            .validate(candidate(json!({"amount": 1, "type": "EXPENSE"})))
            .unwrap();
        assert_eq!(record.kind, TransactionType::Expense);
    }

    #[test]
    fn test_unknown_type_fails() {
        let validator = RecordValidator::new();
        let err = validator
            .validate(candidate(json!({"amount": 1, "type": "transfer"})))
            .unwrap_err();
        assert!(matches!(err, Error::SchemaViolation(_)));
    }

    #[test]
    fn test_empty_date_defaults_to_today() {
        let validator = RecordValidator::new();
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let record = validator
            .validate_with_today(
                candidate(json!({"amount": 1, "type": "Expense", "date": ""})),
                today,
            )
            .unwrap();
        assert_eq!(record.date, today);
    }

    #[test]
    fn test_unparsable_date_defaults_to_today() {
        let validator = RecordValidator::new();
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let record = validator
            .validate_with_today(
                candidate(json!({"amount": 1, "type": "Expense", "date": "next tuesday"})),
                today,
            )
            .unwrap();
        assert_eq!(record.date, today);
    }

    #[test]
    fn test_optional_strings_default_empty() {
        let validator = RecordValidator::new();
        let record = validator
            .validate(candidate(json!({"amount": 1, "type": "Income"})))
            .unwrap();
        assert_eq!(record.merchant, "");
        assert_eq!(record.category, "");
        assert_eq!(record.summary, "");
    }

    #[test]
    fn test_candidate_id_is_ignored() {
        let validator = RecordValidator::new();
        let record = validator
            .validate(candidate(json!({"amount": 1, "type": "Income", "id": 7})))
            .unwrap();
        assert_ne!(record.id, 7);
    }

    #[test]
    fn test_validation_idempotent_modulo_id() {
        let validator = RecordValidator::new();
        let fields = json!({
            "merchant": "Gojek",
            "amount": "25000",
            "date": "2025-07-01",
            "category": "Transport",
            "type": "expense",
            "summary": "ride"
        });

        let first = validator.validate(candidate(fields.clone())).unwrap();
        let second = validator.validate(candidate(fields)).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.merchant, second.merchant);
        assert_eq!(first.amount, second.amount);
        assert_eq!(first.date, second.date);
        assert_eq!(first.category, second.category);
        assert_eq!(first.kind, second.kind);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_ids_monotonic_within_one_millisecond() {
        let ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }
}
