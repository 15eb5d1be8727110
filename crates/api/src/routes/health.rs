use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use smartnews_db::repositories::FlashcardRepo;

use crate::handlers::info;
use crate::state::AppState;

/// Liveness report for load balancers and the reader's status badge.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"`, or `"degraded"` when the flashcard store does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Saved flashcards, absent when the store is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flashcards: Option<i64>,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let flashcards = match FlashcardRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Flashcard store unreachable during health check");
            None
        }
    };

    Json(HealthReport {
        status: if flashcards.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: flashcards.is_some(),
        flashcards,
    })
}

/// Routes served outside `/api`.
///
/// ```text
/// GET /         -> service banner
/// GET /health   -> health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(info::banner))
        .route("/health", get(health))
}
