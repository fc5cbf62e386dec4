//! Input normalization
//!
//! Turns a (text, optional-attachment) pair into the normalized form the
//! prompt builder consumes. Attachment bytes are read fully into memory
//! before request construction.

use std::path::Path;

use crate::error::{Error, Result};

/// Fallback user text when only an attachment is supplied
const DEFAULT_PROMPT: &str = "Analyze this financial document and extract details.";

/// Unvalidated user input: free text, an attachment, or both
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub text: Option<String>,
    pub attachment: Option<RawAttachment>,
}

impl RawInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            attachment: None,
        }
    }
}

/// Attachment as supplied by the caller, media type possibly missing
#[derive(Debug, Clone)]
pub struct RawAttachment {
    pub bytes: Vec<u8>,
    pub media_type: Option<String>,
}

impl RawAttachment {
    /// Read an attachment from disk, inferring the media type from the
    /// file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            Error::UnreadableAttachment(format!("{}: {}", path.display(), e))
        })?;
        let media_type = media_type_for(path);
        Ok(Self { bytes, media_type })
    }
}

/// Media type from a file extension; None for unrecognized extensions
fn media_type_for(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let media_type = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(media_type.to_string())
}

/// Attachment ready for request construction
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPart {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

/// Model-ready input: text is always present, attachment is optional
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    pub text: String,
    pub attachment: Option<AttachmentPart>,
}

/// Normalize raw input for the extraction pipeline
///
/// Fails with `InvalidInput` when both text and attachment are absent, and
/// with `UnreadableAttachment` when an attachment lacks bytes or a media
/// type tag. Attachment-only input gets the fixed analyze prompt as text.
pub fn normalize(input: RawInput) -> Result<NormalizedInput> {
    let text = input
        .text
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    if text.is_none() && input.attachment.is_none() {
        return Err(Error::InvalidInput(
            "either text or an attachment is required".into(),
        ));
    }

    let attachment = match input.attachment {
        Some(raw) => {
            if raw.bytes.is_empty() {
                return Err(Error::UnreadableAttachment(
                    "attachment has no readable bytes".into(),
                ));
            }
            let media_type = raw
                .media_type
                .filter(|m| !m.trim().is_empty())
                .ok_or_else(|| {
                    Error::UnreadableAttachment("attachment has no media type tag".into())
                })?;
            Some(AttachmentPart {
                bytes: raw.bytes,
                media_type,
            })
        }
        None => None,
    };

    Ok(NormalizedInput {
        text: text.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        attachment,
    })
}
