//! Mock gateway for testing
//!
//! Returns scripted responses for the pipeline tests and records every
//! issued request so tests can assert on prompt construction. Useful for
//! development without a credential.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::request::ExtractionRequest;

use super::ModelGateway;

/// Canned record returned when no response has been scripted
const DEFAULT_RESPONSE: &str = r#"{"merchant":"Warung Mock","amount":10000,"date":"2025-01-15","category":"Food","type":"Expense","summary":"nasi goreng"}"#;

/// Mock generation gateway
///
/// Scripted responses are consumed in order; once the script is exhausted
/// the canned default record is returned.
#[derive(Clone, Default)]
pub struct MockGateway {
    script: Arc<Mutex<VecDeque<Result<String, GatewayError>>>>,
    requests: Arc<Mutex<Vec<ExtractionRequest>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers with the given text first
    pub fn with_response(response: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.push_response(response);
        mock
    }

    /// Queue a successful response
    pub fn push_response(&self, response: impl Into<String>) {
        lock(&self.script).push_back(Ok(response.into()));
    }

    /// Queue a failure
    pub fn push_failure(&self, error: GatewayError) {
        lock(&self.script).push_back(Err(error));
    }

    /// Requests issued so far, in order
    pub fn requests(&self) -> Vec<ExtractionRequest> {
        lock(&self.requests).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn generate(
        &self,
        request: &ExtractionRequest,
    ) -> std::result::Result<String, GatewayError> {
        lock(&self.requests).push(request.clone());

        match lock(&self.script).pop_front() {
            Some(scripted) => scripted,
            None => Ok(DEFAULT_RESPONSE.to_string()),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
