//! Aggregate snapshot display

use std::cmp::Ordering;

use anyhow::Result;

use duit_core::aggregate;

use crate::store::Store;

pub fn cmd_summary(store: &Store) -> Result<()> {
    let collection = store.load()?;
    let snapshot = aggregate(&collection);

    println!();
    println!("📊 Summary ({} transactions)", collection.len());
    println!("   ─────────────────────────────────────");
    println!("   Income:   {:>16.2}", snapshot.total_income);
    println!("   Expense:  {:>16.2}", snapshot.total_expense);
    println!("   Balance:  {:>16.2}", snapshot.balance);

    if !snapshot.category_totals.is_empty() {
        println!();
        println!("   Spending by category");

        let mut categories: Vec<_> = snapshot.category_totals.iter().collect();
        categories.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(Ordering::Equal));

        for (category, total) in categories {
            let label = if category.is_empty() {
                "(uncategorized)"
            } else {
                category.as_str()
            };
            println!("   {:<20} {:>12.2}", label, total);
        }
    }

    println!();
    Ok(())
}
