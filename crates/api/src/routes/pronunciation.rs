use axum::routing::post;
use axum::Router;

use crate::handlers::pronunciation;
use crate::state::AppState;

/// Pronunciation routes mounted at `/pronunciation`.
///
/// ```text
/// POST /score   -> score
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/score", post(pronunciation::score))
}
