use axum::routing::get;
use axum::Router;

use crate::handlers::dictionary;
use crate::state::AppState;

/// Dictionary routes mounted at `/dictionary`.
///
/// ```text
/// GET /{word}   -> lookup_word
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{word}", get(dictionary::lookup_word))
}
