//! Natural-language insights over the transaction history
//!
//! A single bounded-context summarization request: at most the 50 most
//! recent records are serialized into the advisor prompt. On gateway
//! failure the caller keeps whatever insights it was already showing;
//! nothing is synthesized from partial state.

use tracing::debug;

use crate::error::{Error, Result};
use crate::gateway::{GatewayClient, ModelGateway};
use crate::models::TransactionCollection;
use crate::prompts;

/// Upper bound on records serialized into the insights prompt
pub const INSIGHTS_CONTEXT_LIMIT: usize = 50;

/// Issues insight requests over a snapshot of the collection
pub struct InsightsRequester {
    gateway: GatewayClient,
}

impl InsightsRequester {
    pub fn new(gateway: GatewayClient) -> Self {
        Self { gateway }
    }

    /// Request advice over the most recent transactions
    pub async fn request(&self, collection: &TransactionCollection) -> Result<String> {
        let slice = collection.recent(INSIGHTS_CONTEXT_LIMIT);
        let serialized = serde_json::to_string(slice)
            .map_err(|e| Error::InsightsUnavailable(format!("history not serializable: {}", e)))?;
        let prompt = prompts::render_insights(&serialized);

        debug!(records = slice.len(), model = %self.gateway.model(), "Requesting insights");

        self.gateway
            .generate_text(&prompt)
            .await
            .map_err(|e| Error::InsightsUnavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::gateway::MockGateway;
    use crate::models::{TransactionRecord, TransactionType};
    use crate::request::RequestPart;
    use chrono::NaiveDate;

    fn collection_of(n: usize) -> TransactionCollection {
        (0..n as i64)
            .map(|id| TransactionRecord {
                id,
                merchant: format!("Toko {}", id),
                amount: 1_000.0,
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                category: "Food".into(),
                kind: TransactionType::Expense,
                summary: String::new(),
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn prompt_sent(mock: &MockGateway) -> String {
        match &mock.requests()[0].parts()[0] {
            RequestPart::Text(text) => text.clone(),
            other => panic!("expected text part, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_returns_gateway_text() {
        let mock = MockGateway::with_response("1. Kurangi jajan kopi.");
        let requester = InsightsRequester::new(GatewayClient::Mock(mock.clone()));

        let insights = requester.request(&collection_of(3)).await.unwrap();
        assert_eq!(insights, "1. Kurangi jajan kopi.");

        let prompt = prompt_sent(&mock);
        assert!(prompt.contains("penasihat keuangan"));
        assert!(prompt.contains("Toko 0"));
    }

    #[tokio::test]
    async fn test_context_capped_at_limit() {
        let mock = MockGateway::with_response("ok");
        let requester = InsightsRequester::new(GatewayClient::Mock(mock.clone()));

        requester.request(&collection_of(80)).await.unwrap();

        let prompt = prompt_sent(&mock);
        let sent: Vec<serde_json::Value> = {
            let start = prompt.find('[').unwrap();
            let end = prompt.rfind(']').unwrap();
            serde_json::from_str(&prompt[start..=end]).unwrap()
        };
        assert_eq!(sent.len(), INSIGHTS_CONTEXT_LIMIT);
    }

    #[tokio::test]
    async fn test_gateway_failure_surfaces_as_unavailable() {
        let mock = MockGateway::new();
        mock.push_failure(GatewayError::Service("503".into()));
        let requester = InsightsRequester::new(GatewayClient::Mock(mock));

        let err = requester.request(&collection_of(1)).await.unwrap_err();
        assert!(matches!(err, Error::InsightsUnavailable(_)));
    }
}
