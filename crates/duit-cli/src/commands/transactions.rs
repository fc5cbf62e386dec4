//! Transaction listing and history reset

use anyhow::Result;

use duit_core::TransactionType;

use super::truncate;
use crate::store::Store;

pub fn cmd_transactions_list(store: &Store, limit: usize) -> Result<()> {
    let collection = store.load()?;

    if collection.is_empty() {
        println!("No transactions yet. Record one with `duit add \"Makan di McD 50rb\"`.");
        return Ok(());
    }

    println!();
    for record in collection.recent(limit) {
        let sign = match record.kind {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        };
        let label = if record.merchant.is_empty() {
            &record.summary
        } else {
            &record.merchant
        };
        println!(
            "   {}  {:<24} {:<14} {}{}",
            record.date,
            truncate(label, 24),
            truncate(&record.category, 14),
            sign,
            record.amount
        );
    }
    println!();
    println!(
        "   Showing {} of {} transactions",
        collection.recent(limit).len(),
        collection.len()
    );

    Ok(())
}

pub fn cmd_reset(store: &Store, yes: bool) -> Result<()> {
    if !yes {
        println!("This deletes the whole transaction history. Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut collection = store.load()?;
    let removed = collection.len();
    collection.clear();
    store.save(&collection)?;

    println!("🗑️  Cleared {} transactions", removed);
    Ok(())
}
