//! News source adapter.

use std::sync::Arc;

use async_trait::async_trait;
use smartnews_core::article::{ArticlePage, ArticleQuery};
use smartnews_core::error::CoreError;

use crate::error::AdapterError;

/// A paginated, read-only article feed.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_page(&self, query: &ArticleQuery) -> Result<ArticlePage, AdapterError>;
}

pub struct NewsAdapter {
    source: Arc<dyn ArticleSource>,
}

impl NewsAdapter {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self { source }
    }

    /// Fetch one page of articles.
    ///
    /// A failed call is an error, never an empty page.
    pub async fn articles(&self, query: &ArticleQuery) -> Result<ArticlePage, CoreError> {
        tracing::debug!(page = query.page, q = ?query.search_term(), section = ?query.section_filter(), "Fetching articles");
        self.source.fetch_page(query).await.map_err(|e| {
            tracing::error!(page = query.page, error = %e, "News source call failed");
            CoreError::from(e)
        })
    }
}
