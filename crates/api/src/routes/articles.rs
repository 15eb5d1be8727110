use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes, mounted at both `/articles` and `/news`.
///
/// ```text
/// GET /    -> list_articles
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(articles::list_articles))
}
