use axum::routing::{get, post};
use axum::Router;

use crate::handlers::translate;
use crate::state::AppState;

/// Machine-translation routes mounted at `/translate`.
///
/// ```text
/// POST /            -> translate_text
/// GET  /languages   -> list_languages
/// POST /detect      -> detect_language
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(translate::translate_text))
        .route("/languages", get(translate::list_languages))
        .route("/detect", post(translate::detect_language))
}
