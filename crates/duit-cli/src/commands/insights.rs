//! AI financial insights over recent history

use anyhow::Result;

use duit_core::{GatewayClient, InsightsRequester};

use crate::store::Store;

pub async fn cmd_insights(store: &Store) -> Result<()> {
    let collection = store.load()?;

    if collection.is_empty() {
        println!("Record a transaction first to unlock insights.");
        return Ok(());
    }

    let requester = InsightsRequester::new(GatewayClient::from_env());
    let insights = requester.request(&collection).await?;

    println!();
    println!("💡 Financial insights");
    println!();
    println!("{}", insights.trim());
    println!();

    Ok(())
}
