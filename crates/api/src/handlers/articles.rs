use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use smartnews_core::article::{ArticlePage, ArticleQuery};

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Query parameters for the article list (`?page=&q=&section=`).
#[derive(Debug, Default, Deserialize)]
pub struct ArticleParams {
    /// Zero-based page index (default 0).
    pub page: Option<u32>,
    pub q: Option<String>,
    pub section: Option<String>,
}

impl From<ArticleParams> for ArticleQuery {
    fn from(params: ArticleParams) -> Self {
        Self {
            page: params.page.unwrap_or(0),
            q: params.q,
            section: params.section,
        }
    }
}

/// GET /api/articles (also /api/news)
///
/// One page of the newest articles, optionally searched or filtered by section.
pub async fn list_articles(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ArticleParams>,
) -> AppResult<Json<SuccessResponse<ArticlePage>>> {
    let query = ArticleQuery::from(params);
    let page = state.news.articles(&query).await?;

    tracing::info!(
        page = query.page,
        returned = page.articles.len(),
        total = page.total_results,
        "Articles fetched",
    );

    Ok(Json(SuccessResponse::new(page)))
}
