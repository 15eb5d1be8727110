//! Client for The Guardian content API (`GET /search`).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use smartnews_core::article::{
    image_or_placeholder, Article, ArticlePage, ArticleQuery, PAGE_SIZE, SOURCE_NAME,
    UNKNOWN_AUTHOR,
};
use smartnews_core::types::Timestamp;

use crate::error::AdapterError;
use crate::http;
use crate::news::ArticleSource;

const SERVICE: &str = "The Guardian";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Extra fields requested per article; `body` is the full HTML text.
const SHOW_FIELDS: &str = "headline,thumbnail,body,trailText,byline";

#[derive(Debug, Clone)]
pub struct GuardianConfig {
    pub api_key: Option<String>,
    /// e.g. `https://content.guardianapis.com`.
    pub base_url: String,
}

pub struct GuardianClient {
    client: reqwest::Client,
    config: GuardianConfig,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchResponse,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResult {
    id: String,
    #[serde(default)]
    web_title: String,
    #[serde(default)]
    web_url: String,
    web_publication_date: Option<Timestamp>,
    #[serde(default)]
    fields: ResultFields,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultFields {
    headline: Option<String>,
    thumbnail: Option<String>,
    body: Option<String>,
    trail_text: Option<String>,
    byline: Option<String>,
}

impl GuardianClient {
    pub fn new(config: GuardianConfig) -> Result<Self, AdapterError> {
        Ok(Self {
            client: http::build_client(SERVICE, REQUEST_TIMEOUT)?,
            config,
        })
    }
}

/// Query-string parameters for one page request (the key is added separately).
fn search_params(query: &ArticleQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.upstream_page().to_string()),
        ("page-size", PAGE_SIZE.to_string()),
        ("order-by", "newest".to_string()),
        ("show-fields", SHOW_FIELDS.to_string()),
    ];
    if let Some(q) = query.search_term() {
        params.push(("q", q.to_string()));
    }
    if let Some(section) = query.section_filter() {
        params.push(("section", section.to_string()));
    }
    params
}

fn to_article(result: SearchResult) -> Article {
    let fields = result.fields;
    Article {
        title: fields.headline.unwrap_or(result.web_title),
        content: fields.body.unwrap_or_default(),
        summary: fields.trail_text.unwrap_or_default(),
        url: result.web_url,
        url_to_image: image_or_placeholder(fields.thumbnail),
        published_at: result.web_publication_date,
        source: SOURCE_NAME.to_string(),
        author: fields
            .byline
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        id: result.id,
    }
}

fn to_page(envelope: SearchEnvelope, page: u32) -> ArticlePage {
    ArticlePage {
        total_results: envelope.response.total,
        articles: envelope
            .response
            .results
            .into_iter()
            .map(to_article)
            .collect(),
        page,
    }
}

#[async_trait]
impl ArticleSource for GuardianClient {
    async fn fetch_page(&self, query: &ArticleQuery) -> Result<ArticlePage, AdapterError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AdapterError::NotConfigured {
                service: SERVICE,
                setting: "NEWS_API_KEY",
            })?;

        let request = self
            .client
            .get(format!("{}/search", self.config.base_url.trim_end_matches('/')))
            .query(&[("api-key", api_key)])
            .query(&search_params(query));

        let response = http::send(SERVICE, request).await?;
        let envelope: SearchEnvelope = http::parse_json(SERVICE, response).await?;
        Ok(to_page(envelope, query.page))
    }
}
