//! Route definitions for the generative-AI modes.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// AI routes mounted at `/ai`.
///
/// ```text
/// POST /translate        -> translate
/// POST /summarize        -> summarize
/// POST /quiz             -> quiz
/// POST /grammar          -> grammar
/// POST /explain          -> explain
/// POST /text-to-speech   -> text_to_speech
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/translate", post(ai::translate))
        .route("/summarize", post(ai::summarize))
        .route("/quiz", post(ai::quiz))
        .route("/grammar", post(ai::grammar))
        .route("/explain", post(ai::explain))
        .route("/text-to-speech", post(ai::text_to_speech))
}
