//! Generation-service gateway abstraction
//!
//! This module provides a backend-agnostic interface to the opaque
//! generation service: given a prompt and optional binary attachment,
//! return natural-language text.
//!
//! # Architecture
//!
//! - `ModelGateway` trait: the one `generate` operation plus a plain-prompt
//!   convenience form
//! - `GatewayClient` enum: concrete wrapper providing Clone + compile-time
//!   dispatch
//! - Backend implementations: `GeminiGateway`, `MockGateway`
//!
//! Gateway output is untrusted: it is never assumed to be valid JSON or to
//! satisfy the extraction schema. Failures are non-retriable within a single
//! request context; re-submission is a caller decision.
//!
//! # Configuration
//!
//! Environment variables (read once at construction):
//! - `GEMINI_API_KEY`: Generation-service credential (required for real calls)
//! - `GEMINI_MODEL`: Model name (default: gemini-2.5-flash)

mod gemini;
mod mock;

pub use gemini::GeminiGateway;
pub use mock::MockGateway;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::request::ExtractionRequest;

/// Trait defining the interface to the generation service
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send a generation request and return the raw response text
    async fn generate(&self, request: &ExtractionRequest)
        -> std::result::Result<String, GatewayError>;

    /// Plain-prompt form of `generate`
    async fn generate_text(&self, prompt: &str) -> std::result::Result<String, GatewayError> {
        self.generate(&ExtractionRequest::text(prompt)).await
    }

    /// Get the model name (for logging)
    fn model(&self) -> &str;
}

/// Concrete gateway client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum GatewayClient {
    /// Gemini generateContent backend (HTTP API)
    Gemini(GeminiGateway),
    /// Mock backend for testing
    Mock(MockGateway),
}

impl GatewayClient {
    /// Create a gateway client from environment variables
    ///
    /// A missing credential does not fail construction; it surfaces as
    /// `MissingCredentials` on the first generate call, before any network
    /// attempt.
    pub fn from_env() -> Self {
        GatewayClient::Gemini(GeminiGateway::from_env())
    }

    /// Create a Gemini backend directly
    pub fn gemini(api_key: &str, model: &str) -> Self {
        GatewayClient::Gemini(GeminiGateway::new(api_key, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        GatewayClient::Mock(MockGateway::new())
    }
}

#[async_trait]
impl ModelGateway for GatewayClient {
    async fn generate(
        &self,
        request: &ExtractionRequest,
    ) -> std::result::Result<String, GatewayError> {
        match self {
            GatewayClient::Gemini(b) => b.generate(request).await,
            GatewayClient::Mock(b) => b.generate(request).await,
        }
    }

    fn model(&self) -> &str {
        match self {
            GatewayClient::Gemini(b) => b.model(),
            GatewayClient::Mock(b) => b.model(),
        }
    }
}
