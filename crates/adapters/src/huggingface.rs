//! Hugging Face hosted-inference text-to-speech client.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::error::AdapterError;
use crate::http;
use crate::speech::{Audio, SpeechSynthesizer};

const SERVICE: &str = "Hugging Face";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Assumed when the service omits or garbles the content type.
const DEFAULT_AUDIO_FORMAT: &str = "wav";

#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Optional; anonymous calls work on the free tier with lower limits.
    pub token: Option<String>,
    /// Full model inference URL.
    pub model_url: String,
}

pub struct HuggingFaceTts {
    client: reqwest::Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceTts {
    pub fn new(config: HuggingFaceConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            client: http::build_client(SERVICE, REQUEST_TIMEOUT)?,
            config,
        })
    }
}

/// `audio/x-wav` -> `wav`, `audio/flac; charset=...` -> `flac`.
fn audio_format(content_type: Option<&str>) -> Option<String> {
    let subtype = content_type?
        .split(';')
        .next()?
        .trim()
        .strip_prefix("audio/")?;
    let subtype = subtype.strip_prefix("x-").unwrap_or(subtype);
    (!subtype.is_empty()).then(|| subtype.to_ascii_lowercase())
}

#[async_trait]
impl SpeechSynthesizer for HuggingFaceTts {
    async fn synthesize(&self, text: &str) -> Result<Audio, AdapterError> {
        let mut request = self
            .client
            .post(&self.config.model_url)
            .json(&json!({ "inputs": text }));
        if let Some(token) = self.config.token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = http::ensure_success(SERVICE, http::send(SERVICE, request).await?).await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if content_type.as_deref().is_some_and(|ct| ct.starts_with("application/json")) {
            return Err(AdapterError::Decode {
                service: SERVICE,
                detail: "expected audio, got JSON".to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AdapterError::from_reqwest(SERVICE, e))?;
        if bytes.is_empty() {
            return Err(AdapterError::Decode {
                service: SERVICE,
                detail: "empty audio body".to_string(),
            });
        }

        Ok(Audio {
            bytes: bytes.to_vec(),
            format: audio_format(content_type.as_deref())
                .unwrap_or_else(|| DEFAULT_AUDIO_FORMAT.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_comes_from_audio_content_type() {
        assert_eq!(audio_format(Some("audio/flac")).as_deref(), Some("flac"));
        assert_eq!(audio_format(Some("audio/x-wav")).as_deref(), Some("wav"));
        assert_eq!(audio_format(Some("audio/WAV; rate=22050")).as_deref(), Some("wav"));
    }

    #[test]
    fn non_audio_content_type_has_no_format() {
        assert_eq!(audio_format(Some("application/octet-stream")), None);
        assert_eq!(audio_format(Some("audio/")), None);
        assert_eq!(audio_format(None), None);
    }
}
