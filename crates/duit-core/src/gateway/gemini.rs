//! Gemini backend implementation
//!
//! HTTP client for the Gemini `generateContent` API. The credential is
//! injected at construction and checked before any network attempt; request
//! parts are mapped onto the API's content-part shape with attachments
//! inline-encoded as base64.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GatewayError;
use crate::request::{ExtractionRequest, RequestPart};

use super::ModelGateway;

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Per-request timeout; the core imposes no additional timeout layer
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Gemini gateway over the generateContent HTTP API
#[derive(Clone)]
pub struct GeminiGateway {
    http_client: Client,
    api_key: String,
    model: String,
}

impl GeminiGateway {
    /// Create a new Gemini gateway with an explicit credential
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.trim().to_string(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    ///
    /// The credential is read once here, never ad hoc inside request logic.
    /// An unset `GEMINI_API_KEY` still constructs a gateway; the missing
    /// credential short-circuits the first generate call instead.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(&api_key, &model)
    }

    /// Create a new instance with a different model (same credential)
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            http_client: self.http_client.clone(),
            api_key: self.api_key.clone(),
            model: model.to_string(),
        }
    }
}

/// Request body for generateContent
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<ContentPart>,
}

/// One content part: text or inline data, never both
#[derive(Debug, Serialize)]
struct ContentPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    /// Base64-encoded attachment bytes
    data: String,
}

/// Response body for generateContent
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extract text content from the first candidate
    fn text(&self) -> Option<String> {
        let texts: Vec<_> = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }
}

fn build_body(request: &ExtractionRequest) -> GenerateContentRequest {
    let parts = request
        .parts()
        .iter()
        .map(|part| match part {
            RequestPart::Text(text) => ContentPart {
                text: Some(text.clone()),
                inline_data: None,
            },
            RequestPart::InlineData { media_type, data } => ContentPart {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: media_type.clone(),
                    data: base64::engine::general_purpose::STANDARD.encode(data),
                }),
            },
        })
        .collect();

    GenerateContentRequest {
        contents: vec![Content { parts }],
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn generate(
        &self,
        request: &ExtractionRequest,
    ) -> std::result::Result<String, GatewayError> {
        if self.api_key.is_empty() {
            return Err(GatewayError::MissingCredentials(
                "GEMINI_API_KEY is not set".into(),
            ));
        }

        let body = build_body(request);
        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);

        debug!(
            model = %self.model,
            parts = request.parts().len(),
            "Sending generateContent request"
        );

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Service(format!(
                "generateContent failed ({}): {}",
                status, body
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text = parsed
            .text()
            .ok_or_else(|| GatewayError::Service("No text in model response".into()))?;

        debug!(chars = text.len(), "Received generateContent response");

        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
