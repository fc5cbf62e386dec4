//! Aggregation engine
//!
//! A pure function of the current transaction collection; nothing here holds
//! state and nothing mutates the collection.

use crate::models::{AggregateSnapshot, TransactionCollection, TransactionType};

/// Compute running totals and the per-category expense breakdown
///
/// Single pass for income/expense totals; category buckets sum expenses
/// only. An empty collection yields an all-zero snapshot with an empty
/// category mapping.
pub fn aggregate(collection: &TransactionCollection) -> AggregateSnapshot {
    let mut snapshot = AggregateSnapshot::default();

    for record in collection.records() {
        match record.kind {
            TransactionType::Income => snapshot.total_income += record.amount,
            TransactionType::Expense => {
                snapshot.total_expense += record.amount;
                *snapshot
                    .category_totals
                    .entry(record.category.clone())
                    .or_insert(0.0) += record.amount;
            }
        }
    }

    snapshot.balance = snapshot.total_income - snapshot.total_expense;
    snapshot
}
