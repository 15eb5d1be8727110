use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use smartnews_core::error::CoreError;

/// Everything a handler can fail with.
///
/// Rendered as `{ "success": false, "message", "code" }`, plus `limit` for
/// 413s and `path`/`method` for unmatched routes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Flashcard store failure.
    #[error("Flashcard store error: {0}")]
    Database(#[from] sqlx::Error),

    /// A non-critical upstream is down; the client may retry later.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The request body exceeded the configured limit.
    #[error("Request payload too large (limit {limit})")]
    PayloadTooLarge { limit: String },

    /// The whole request outlived the server timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// No route matched the request.
    #[error("Route not found: {method} {path}")]
    RouteNotFound { method: String, path: String },
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Duplicate(msg) => (StatusCode::BAD_REQUEST, "DUPLICATE", msg.clone()),
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found: {key}"),
                ),
                CoreError::UpstreamTimeout(msg) => {
                    tracing::error!(error = %msg, "Upstream timeout");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_TIMEOUT",
                        msg.clone(),
                    )
                }
                CoreError::UpstreamUnavailable(msg) => {
                    tracing::error!(error = %msg, "Upstream unavailable");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_UNAVAILABLE",
                        msg.clone(),
                    )
                }
                CoreError::UpstreamRejected(msg) => {
                    tracing::error!(error = %msg, "Upstream rejected request");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "UPSTREAM_REJECTED",
                        msg.clone(),
                    )
                }
                CoreError::MalformedAiResponse(msg) => {
                    tracing::error!(error = %msg, "Malformed AI response");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "MALFORMED_AI_RESPONSE",
                        "The AI service returned an unexpected response".to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                msg.clone(),
            ),
            AppError::PayloadTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                "Request payload too large".to_string(),
            ),
            AppError::RequestTimeout => (
                StatusCode::REQUEST_TIMEOUT,
                "REQUEST_TIMEOUT",
                "The request took too long to complete".to_string(),
            ),
            AppError::RouteNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "ROUTE_NOT_FOUND",
                "Route not found".to_string(),
            ),
        };

        let mut body = json!({
            "success": false,
            "message": message,
            "code": code,
        });
        match &self {
            AppError::PayloadTooLarge { limit } => {
                body["limit"] = json!(limit);
            }
            AppError::RouteNotFound { method, path } => {
                body["path"] = json!(path);
                body["method"] = json!(method);
            }
            _ => {}
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Map upstream outages to [`AppError::ServiceUnavailable`] with `message`.
///
/// For routes whose upstream is optional to the reader (machine
/// translation, summaries): a 503 tells the client to retry later.
/// Other errors pass through unchanged.
pub fn unavailable_on_outage(message: &'static str) -> impl Fn(CoreError) -> AppError {
    move |err| {
        if err.is_upstream_outage() {
            tracing::warn!(error = %err, "Upstream outage reported as 503");
            AppError::ServiceUnavailable(message.to_string())
        } else {
            AppError::Core(err)
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 400 `DUPLICATE`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        err if smartnews_db::is_unique_violation(err) => (
            StatusCode::BAD_REQUEST,
            "DUPLICATE",
            "Duplicate value violates a unique constraint".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
