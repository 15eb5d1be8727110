//! News article shapes served to the reader.
//!
//! Articles are never stored; every page view fetches a fresh page from
//! the news source.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Fixed number of articles per page.
pub const PAGE_SIZE: u32 = 12;

/// Image shown when the source provides no thumbnail.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/800x400?text=The+Guardian";

/// Display name of the news source.
pub const SOURCE_NAME: &str = "The Guardian";

/// Byline used when the source omits one.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// One article, reshaped from the news source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    /// HTML body, passed through for the reader to render.
    pub content: String,
    /// Plain-text standfirst.
    pub summary: String,
    pub url: String,
    /// Never empty: falls back to [`PLACEHOLDER_IMAGE_URL`].
    pub url_to_image: String,
    pub published_at: Option<Timestamp>,
    pub source: String,
    pub author: String,
}

/// One page of articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePage {
    pub total_results: u64,
    pub articles: Vec<Article>,
    /// Zero-based page index as requested by the caller.
    pub page: u32,
}

/// Filters for an article page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Zero-based page index.
    pub page: u32,
    /// Free-text search; `None` or empty means no filter.
    pub q: Option<String>,
    /// Section id (world, technology, science, ...).
    pub section: Option<String>,
}

impl ArticleQuery {
    /// The news source numbers pages from 1.
    pub fn upstream_page(&self) -> u32 {
        self.page.saturating_add(1)
    }

    /// The search term, if one was given.
    pub fn search_term(&self) -> Option<&str> {
        non_empty(self.q.as_deref())
    }

    /// The section filter, if one was given.
    pub fn section_filter(&self) -> Option<&str> {
        non_empty(self.section.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Choose the thumbnail or the placeholder.
pub fn image_or_placeholder(thumbnail: Option<String>) -> String {
    thumbnail
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string())
}
