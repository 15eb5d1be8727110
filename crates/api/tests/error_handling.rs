//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use smartnews_api::error::{unavailable_on_outage, AppError};
use smartnews_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("missing front".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "missing front");
}

#[tokio::test]
async fn duplicate_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Duplicate("already saved".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "DUPLICATE");
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Word",
        key: "qwzx".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Word not found: qwzx");
}

#[tokio::test]
async fn upstream_errors_return_500_with_distinct_codes() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::UpstreamTimeout("slow".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPSTREAM_TIMEOUT");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::UpstreamUnavailable("down".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::UpstreamRejected("bad key".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPSTREAM_REJECTED");
}

#[tokio::test]
async fn malformed_ai_response_hides_raw_output() {
    let err = AppError::Core(CoreError::MalformedAiResponse(
        "expected value at line 1 column 1".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "MALFORMED_AI_RESPONSE");
    assert!(!json["message"].as_str().unwrap().contains("line 1"));
}

#[tokio::test]
async fn internal_error_is_sanitized() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Internal("secret detail".into()))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// HTTP-specific errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn payload_too_large_returns_413_with_limit() {
    let (status, json) = error_to_response(AppError::PayloadTooLarge {
        limit: "50MB".into(),
    })
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["limit"], "50MB");
}

#[tokio::test]
async fn request_timeout_returns_408_json() {
    let (status, json) = error_to_response(AppError::RequestTimeout).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "REQUEST_TIMEOUT");
}

#[tokio::test]
async fn route_not_found_echoes_request() {
    let (status, json) = error_to_response(AppError::RouteNotFound {
        method: "GET".into(),
        path: "/nope".into(),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["path"], "/nope");
    assert_eq!(json["method"], "GET");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Outage escalation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn outage_escalates_to_503_but_other_errors_pass_through() {
    let escalate = unavailable_on_outage("try again later");

    let (status, json) =
        error_to_response(escalate(CoreError::UpstreamTimeout("slow".into()))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["message"], "try again later");

    let (status, _) = error_to_response(escalate(CoreError::Validation("bad".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejection_by_a_live_service_is_not_escalated() {
    let escalate = unavailable_on_outage("try again later");

    let (status, json) =
        error_to_response(escalate(CoreError::UpstreamRejected("HTTP 400".into()))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "UPSTREAM_REJECTED");
}
