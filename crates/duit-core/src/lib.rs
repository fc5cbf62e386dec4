//! duit Core Library
//!
//! Shared functionality for the duit AI expense tracker:
//! - Input normalization for text and receipt attachments
//! - Schema-constrained extraction request construction
//! - Pluggable generation-service gateway (Gemini, mock)
//! - Response sanitization and candidate validation/repair
//! - Deterministic aggregation over the transaction history
//! - Bounded-context financial insights requests

pub mod aggregate;
pub mod error;
pub mod extractor;
pub mod gateway;
pub mod input;
pub mod insights;
pub mod models;
pub mod prompts;
pub mod request;
pub mod sanitize;
pub mod validate;

pub use aggregate::aggregate;
pub use error::{Error, GatewayError, Result};
pub use extractor::Extractor;
pub use gateway::{GatewayClient, GeminiGateway, MockGateway, ModelGateway};
pub use input::{normalize, AttachmentPart, NormalizedInput, RawAttachment, RawInput};
pub use insights::{InsightsRequester, INSIGHTS_CONTEXT_LIMIT};
pub use models::{
    AggregateSnapshot, Candidate, TransactionCollection, TransactionRecord, TransactionType,
};
pub use request::{build_extraction_request, ExtractionRequest, RequestPart};
pub use sanitize::sanitize_response;
pub use validate::{IdGenerator, RecordValidator};
