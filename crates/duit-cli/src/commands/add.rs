//! Record a transaction from free text and/or a receipt attachment

use std::path::Path;

use anyhow::Result;

use duit_core::{Extractor, RawAttachment, RawInput};

use crate::store::Store;

pub async fn cmd_add(store: &Store, text: &[String], attach: Option<&Path>) -> Result<()> {
    let text = text.join(" ");
    let input = RawInput {
        text: (!text.trim().is_empty()).then_some(text),
        attachment: attach.map(RawAttachment::from_path).transpose()?,
    };

    let extractor = Extractor::from_env();
    let record = extractor.submit_extraction(input).await?;

    let mut collection = store.load()?;
    collection.append(record.clone());
    store.save(&collection)?;

    let merchant = if record.merchant.is_empty() {
        "(unknown)"
    } else {
        record.merchant.as_str()
    };

    println!();
    println!("✅ Recorded {} #{}", record.kind, record.id);
    println!("   Merchant: {}", merchant);
    println!("   Amount:   {}", record.amount);
    println!("   Date:     {}", record.date);
    println!("   Category: {}", record.category);
    if !record.summary.is_empty() {
        println!("   Summary:  {}", record.summary);
    }
    println!();
    println!("   {} transactions in {}", collection.len(), store.path().display());

    Ok(())
}
