//! The extraction pipeline command
//!
//! One explicit round trip: normalize input, render the schema-constrained
//! request, call the gateway, sanitize and validate the response. A failed
//! extraction surfaces a single error and never creates a partial record;
//! appending an accepted record to the collection is the caller's separate
//! step, decoupled from any presentation event loop.

use tracing::debug;

use crate::error::Result;
use crate::gateway::{GatewayClient, ModelGateway};
use crate::input::{normalize, RawInput};
use crate::models::TransactionRecord;
use crate::request::build_extraction_request;
use crate::sanitize::sanitize_response;
use crate::validate::RecordValidator;

/// Drives the extraction pipeline against a gateway
pub struct Extractor {
    gateway: GatewayClient,
    validator: RecordValidator,
}

impl Extractor {
    pub fn new(gateway: GatewayClient) -> Self {
        Self {
            gateway,
            validator: RecordValidator::new(),
        }
    }

    /// Gateway configured from the environment
    pub fn from_env() -> Self {
        Self::new(GatewayClient::from_env())
    }

    pub fn gateway(&self) -> &GatewayClient {
        &self.gateway
    }

    /// Submit one extraction round trip
    ///
    /// No automatic retry on failure; re-submission is a caller decision.
    pub async fn submit_extraction(&self, input: RawInput) -> Result<TransactionRecord> {
        let normalized = normalize(input)?;
        let request = build_extraction_request(&normalized);

        debug!(
            model = %self.gateway.model(),
            has_attachment = normalized.attachment.is_some(),
            "Submitting extraction request"
        );

        let raw = self.gateway.generate(&request).await?;
        let candidate = sanitize_response(&raw)?;
        let record = self.validator.validate(candidate)?;

        debug!(id = record.id, kind = %record.kind, amount = record.amount, "Extraction accepted");

        Ok(record)
    }
}
