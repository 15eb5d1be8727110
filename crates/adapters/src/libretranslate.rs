//! LibreTranslate client.
//!
//! Configured with the `/translate` URL; `/languages` and `/detect` live
//! next to it on the same host.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use smartnews_core::language::{DetectedLanguage, Language};

use crate::error::AdapterError;
use crate::http;
use crate::translate::{MachineTranslator, TranslateRequest};

const SERVICE: &str = "LibreTranslate";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct LibreTranslateConfig {
    /// e.g. `https://libretranslate.com/translate`.
    pub translate_url: String,
}

pub struct LibreTranslateClient {
    client: reqwest::Client,
    config: LibreTranslateConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

impl LibreTranslateClient {
    pub fn new(config: LibreTranslateConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            client: http::build_client(SERVICE, REQUEST_TIMEOUT)?,
            config,
        })
    }

    /// URL of a sibling endpoint (`translate`, `languages`, `detect`).
    fn endpoint(&self, name: &str) -> String {
        let base = self.config.translate_url.trim_end_matches('/');
        let root = base.strip_suffix("/translate").unwrap_or(base);
        format!("{root}/{name}")
    }
}

#[async_trait]
impl MachineTranslator for LibreTranslateClient {
    async fn translate(&self, request: &TranslateRequest) -> Result<String, AdapterError> {
        let body = json!({
            "q": request.text,
            "source": request.source,
            "target": request.target,
            "format": request.format,
        });
        let response =
            http::send(SERVICE, self.client.post(self.endpoint("translate")).json(&body)).await?;
        let parsed: TranslateResponse = http::parse_json(SERVICE, response).await?;
        Ok(parsed.translated_text)
    }

    async fn languages(&self) -> Result<Vec<Language>, AdapterError> {
        let response = http::send(SERVICE, self.client.get(self.endpoint("languages"))).await?;
        http::parse_json(SERVICE, response).await
    }

    async fn detect(&self, text: &str) -> Result<Vec<DetectedLanguage>, AdapterError> {
        let response = http::send(
            SERVICE,
            self.client
                .post(self.endpoint("detect"))
                .json(&json!({ "q": text })),
        )
        .await?;
        http::parse_json(SERVICE, response).await
    }
}
