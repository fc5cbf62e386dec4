//! Error types for duit

use thiserror::Error;

/// Failures from the generation-service transport layer.
///
/// All gateway failures are non-retriable within a single request context:
/// the caller decides whether to re-submit.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Model credentials are not configured: {0}")]
    MissingCredentials(String),

    #[error("Model service error: {0}")]
    Service(String),

    #[error("Model request timed out: {0}")]
    Timeout(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err.to_string())
        } else {
            GatewayError::Service(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// Neither text nor attachment was supplied
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Attachment bytes or media type could not be read
    #[error("Unreadable attachment: {0}")]
    UnreadableAttachment(String),

    /// Transport-stage failure from the generation service
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Model output could not be parsed as a single JSON object
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// A candidate field failed validation with no defined repair
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    /// Insights request failed; prior insights stay untouched
    #[error("Insights unavailable: {0}")]
    InsightsUnavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
