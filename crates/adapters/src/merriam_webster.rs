//! Client for the Merriam-Webster Learner's Dictionary API.
//!
//! `GET {base}/{word}?key=...` answers with an array of entry objects, or an
//! array of spelling suggestions (plain strings) when the word is unknown.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::dictionary::{DictionarySource, HeadwordEntry};
use crate::error::AdapterError;
use crate::http;

const SERVICE: &str = "Merriam-Webster";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct MerriamWebsterConfig {
    pub api_key: Option<String>,
    /// e.g. `https://www.dictionaryapi.com/api/v3/references/learners/json`.
    pub base_url: String,
}

pub struct MerriamWebsterClient {
    client: reqwest::Client,
    config: MerriamWebsterConfig,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    hwi: Headword,
    fl: Option<String>,
    #[serde(default)]
    shortdef: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Headword {
    #[serde(default)]
    hw: String,
    #[serde(default)]
    prs: Vec<Pronunciation>,
}

#[derive(Debug, Deserialize)]
struct Pronunciation {
    ipa: Option<String>,
}

impl MerriamWebsterClient {
    pub fn new(config: MerriamWebsterConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            client: http::build_client(SERVICE, REQUEST_TIMEOUT)?,
            config,
        })
    }

    /// Base URL with the word appended as one percent-encoded path segment.
    fn entry_url(&self, word: &str) -> Result<reqwest::Url, AdapterError> {
        let invalid = || AdapterError::InvalidUrl {
            service: SERVICE,
            url: self.config.base_url.clone(),
        };
        let mut url = reqwest::Url::parse(&self.config.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }
}

/// Read the first entry, or `None` for an empty or suggestions-only answer.
fn first_entry(entries: Vec<serde_json::Value>) -> Result<Option<HeadwordEntry>, AdapterError> {
    let Some(first) = entries.into_iter().next() else {
        return Ok(None);
    };
    if !first.is_object() {
        return Ok(None);
    }

    let raw: RawEntry = serde_json::from_value(first).map_err(|e| AdapterError::Decode {
        service: SERVICE,
        detail: e.to_string(),
    })?;

    Ok(Some(HeadwordEntry {
        headword: raw.hwi.hw,
        ipa: raw.hwi.prs.into_iter().find_map(|p| p.ipa),
        part_of_speech: raw.fl,
        short_defs: raw.shortdef,
    }))
}

#[async_trait]
impl DictionarySource for MerriamWebsterClient {
    async fn lookup(&self, word: &str) -> Result<Option<HeadwordEntry>, AdapterError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AdapterError::NotConfigured {
                service: SERVICE,
                setting: "MW_API_KEY",
            })?;

        let request = self
            .client
            .get(self.entry_url(word)?)
            .query(&[("key", api_key)]);

        let response = http::send(SERVICE, request).await?;
        let entries: Vec<serde_json::Value> = http::parse_json(SERVICE, response).await?;
        first_entry(entries)
    }
}
