//! Model response sanitization
//!
//! Models are asked for bare JSON but routinely wrap it in markdown code
//! fences anyway. The sanitizer strips leading/trailing fence markers and
//! surrounding whitespace, then attempts a strict structured parse. A parse
//! failure is terminal for the request; there is no partial recovery.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::Candidate;

/// Strip and parse a raw model response into a candidate object
pub fn sanitize_response(raw: &str) -> Result<Candidate> {
    let stripped = strip_code_fences(raw);

    let value: Value = serde_json::from_str(stripped).map_err(|e| {
        Error::MalformedResponse(format!("Invalid JSON from model: {} | Raw: {}", e, truncate(raw)))
    })?;

    match value {
        Value::Object(fields) => Ok(Candidate::new(fields)),
        other => Err(Error::MalformedResponse(format!(
            "Expected a single JSON object, got {} | Raw: {}",
            json_kind(&other),
            truncate(raw)
        ))),
    }
}

/// Remove leading/trailing code-fence markers (```json or bare ```)
fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Truncate long responses for the error message
fn truncate(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() > 200 {
        let cut = raw
            .char_indices()
            .take_while(|(i, _)| *i <= 200)
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        format!("{}...", &raw[..cut])
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{"merchant":"McD","amount":50000,"date":"","category":"Food","type":"Expense","summary":"Makan"}"#;

    #[test]
    fn test_unwrapped_object_parses() {
        let candidate = sanitize_response(RECORD_JSON).unwrap();
        assert_eq!(candidate.get("merchant").unwrap(), "McD");
        assert_eq!(candidate.get("amount").unwrap(), 50000);
    }

    #[test]
    fn test_json_fence_matches_unwrapped() {
        let fenced = format!("```json\n{}\n```", RECORD_JSON);
        assert_eq!(
            sanitize_response(&fenced).unwrap(),
            sanitize_response(RECORD_JSON).unwrap()
        );
    }

    #[test]
    fn test_bare_fence_matches_unwrapped() {
        let fenced = format!("```\n{}\n```", RECORD_JSON);
        assert_eq!(
            sanitize_response(&fenced).unwrap(),
            sanitize_response(RECORD_JSON).unwrap()
        );
    }

    #[test]
    fn test_surrounding_whitespace_stripped() {
        let padded = format!("\n\n  ```json\n{}\n```  \n", RECORD_JSON);
        assert!(sanitize_response(&padded).is_ok());
    }

    #[test]
    fn test_inner_content_left_intact() {
        let fenced = "```json\n{\"summary\": \"kopi ``` enak\"}\n```";
        let candidate = sanitize_response(fenced).unwrap();
        assert_eq!(candidate.get("summary").unwrap(), "kopi ``` enak");
    }

    #[test]
    fn test_broken_syntax_is_terminal() {
        let err = sanitize_response("{\"merchant\": \"McD\",").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = sanitize_response("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
        assert!(err.to_string().contains("an array"));

        let err = sanitize_response("\"just a string\"").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_prose_around_object_rejected() {
        // Strict parse: trailing prose is not recovered
        let err = sanitize_response("Here you go: {\"a\": 1} done!").unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_error_echo_truncated() {
        let long = format!("{{\"broken\": \"{}\"", "x".repeat(500));
        let err = sanitize_response(&long).unwrap_err();
        assert!(err.to_string().len() < 400);
        assert!(err.to_string().contains("..."));
    }
}
