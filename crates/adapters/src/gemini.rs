//! REST client for the Gemini generative-language API.
//!
//! Wraps `POST {base}/models/{model}:generateContent`. JSON-mode calls set
//! `responseMimeType: application/json`; the model may still wrap its
//! answer in a code fence, which the core extractor handles.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::AdapterError;
use crate::generative::{OutputFormat, TextGenerator};
use crate::http;

const SERVICE: &str = "Gemini";

/// Generation can be slow for article-sized prompts.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub base_url: String,
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            client: http::build_client(SERVICE, REQUEST_TIMEOUT)?,
            config,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Build the `generateContent` request body.
fn request_body(prompt: &str, format: OutputFormat) -> serde_json::Value {
    let mut body = json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
    });
    if format == OutputFormat::Json {
        body["generationConfig"] = json!({ "responseMimeType": "application/json" });
    }
    body
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateResponse) -> Result<String, AdapterError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if !text.is_empty() {
        return Ok(text);
    }

    let detail = match response.prompt_feedback.and_then(|f| f.block_reason) {
        Some(reason) => format!("prompt blocked: {reason}"),
        None => "no candidate text in response".to_string(),
    };
    Err(AdapterError::Decode {
        service: SERVICE,
        detail,
    })
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, format: OutputFormat) -> Result<String, AdapterError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AdapterError::NotConfigured {
                service: SERVICE,
                setting: "GEMINI_API_KEY",
            })?;

        let request = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request_body(prompt, format));

        let response = http::send(SERVICE, request).await?;
        let parsed: GenerateResponse = http::parse_json(SERVICE, response).await?;
        extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn config(api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: api_key.map(str::to_string),
            model: "gemini-2.0-flash".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/".into(),
        }
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = GeminiClient::new(config(Some("k"))).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn json_mode_sets_response_mime_type() {
        let body = request_body("hi", OutputFormat::Json);
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");

        let body = request_body("hi", OutputFormat::Text);
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn text_parts_are_concatenated() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"world"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Hello, world");
    }

    #[test]
    fn blocked_prompt_is_a_decode_error() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert_matches!(
            extract_text(response),
            Err(AdapterError::Decode { detail, .. }) if detail.contains("SAFETY")
        );
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = GeminiClient::new(config(None)).unwrap();
        assert_matches!(
            client.generate("hi", OutputFormat::Text).await,
            Err(AdapterError::NotConfigured { setting: "GEMINI_API_KEY", .. })
        );
    }
}
