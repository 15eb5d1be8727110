//! Extraction of JSON payloads from generative-model output.
//!
//! The model is asked for raw JSON but is free to wrap it in a markdown
//! code fence (```` ```json ... ``` ````). Every structured AI mode goes
//! through [`extract_structured`] so fence handling and the failure mode
//! are identical across modes.

use serde::de::DeserializeOwned;

use crate::error::CoreError;

const FENCE: &str = "```";

/// Failure to turn model output into the expected structure.
#[derive(Debug, thiserror::Error)]
pub enum StructuredPayloadError {
    #[error("model returned an empty payload")]
    Empty,

    #[error("payload is not valid JSON of the expected shape: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl From<StructuredPayloadError> for CoreError {
    fn from(err: StructuredPayloadError) -> Self {
        CoreError::MalformedAiResponse(err.to_string())
    }
}

/// Remove a leading and trailing markdown code fence, if present.
///
/// An info string directly after the opening fence (`json`, `JSON`, ...)
/// is dropped with it. Text without fences is returned trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let body = match trimmed.strip_prefix(FENCE) {
        Some(rest) => {
            let tag_len = rest
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(rest.len());
            &rest[tag_len..]
        }
        None => trimmed,
    };

    let body = body.trim();
    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

/// Strip fences and deserialize the remaining text as `T`.
pub fn extract_structured<T: DeserializeOwned>(raw: &str) -> Result<T, StructuredPayloadError> {
    let payload = strip_code_fences(raw);
    if payload.is_empty() {
        return Err(StructuredPayloadError::Empty);
    }
    Ok(serde_json::from_str(payload)?)
}
