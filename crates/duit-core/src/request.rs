//! Extraction request construction
//!
//! Renders the fixed instruction block together with normalized input into an
//! ordered, immutable sequence of content parts.

use crate::input::NormalizedInput;
use crate::prompts;

/// One content part of a generation request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPart {
    Text(String),
    /// Raw attachment bytes; encoded for the wire by the gateway
    InlineData { media_type: String, data: Vec<u8> },
}

/// Ordered request payload, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    parts: Vec<RequestPart>,
}

impl ExtractionRequest {
    /// Single-text-part request (the plain-prompt form used for insights)
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![RequestPart::Text(prompt.into())],
        }
    }

    pub fn parts(&self) -> &[RequestPart] {
        &self.parts
    }
}

/// Build the extraction request from normalized input
///
/// Part order is instruction block, attachment, then user text. The
/// attachment precedes the text so image content is weighted as primary
/// evidence when both are present.
pub fn build_extraction_request(input: &NormalizedInput) -> ExtractionRequest {
    let mut parts = vec![RequestPart::Text(prompts::EXTRACT_TRANSACTION.to_string())];

    if let Some(attachment) = &input.attachment {
        parts.push(RequestPart::InlineData {
            media_type: attachment.media_type.clone(),
            data: attachment.bytes.clone(),
        });
    }

    parts.push(RequestPart::Text(input.text.clone()));

    ExtractionRequest { parts }
}
