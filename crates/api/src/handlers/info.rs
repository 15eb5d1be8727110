//! Service banner and the catch-all 404.

use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub version: &'static str,
    pub limits: Limits,
    pub endpoints: Endpoints,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub max_payload: String,
}

#[derive(Serialize)]
pub struct Endpoints {
    pub articles: &'static str,
    pub dictionary: &'static str,
    pub flashcards: &'static str,
    pub ai: &'static str,
    pub translate: &'static str,
    pub pronunciation: &'static str,
    pub health: &'static str,
}

/// GET /
pub async fn banner(State(state): State<AppState>) -> Json<Banner> {
    Json(Banner {
        message: "SmartNews API is running",
        version: env!("CARGO_PKG_VERSION"),
        limits: Limits {
            max_payload: state.config.max_body_label(),
        },
        endpoints: Endpoints {
            articles: "/api/articles",
            dictionary: "/api/dictionary/{word}",
            flashcards: "/api/flashcards",
            ai: "/api/ai",
            translate: "/api/translate",
            pronunciation: "/api/pronunciation/score",
            health: "/health",
        },
    })
}

/// Fallback for unmatched routes.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, path = uri.path(), "No route matched");
    AppError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
