//! Slow collaborators against the request deadline.
//!
//! Each test builds its store first and only then pauses the clock, so the
//! pool's own acquire timeout never fires while time auto-advances.

mod common;

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_json, get, post_json, StubGenerator, Stubs};
use serde_json::json;
use smartnews_api::config::DEFAULT_REQUEST_TIMEOUT_SECS;
use smartnews_core::dictionary::GLOSS_PLACEHOLDER;

fn config_with_timeout(secs: u64) -> smartnews_api::config::ServerConfig {
    smartnews_api::config::ServerConfig {
        request_timeout_secs: secs,
        ..common::test_config()
    }
}

async fn app_with_hanging_model(request_timeout_secs: u64) -> axum::Router {
    common::build_test_app_with_config(
        common::test_pool().await,
        &Stubs::online().with_generator(StubGenerator::hanging()),
        config_with_timeout(request_timeout_secs),
    )
}

#[tokio::test]
async fn dictionary_serves_placeholder_when_gloss_hangs() {
    let app = app_with_hanging_model(DEFAULT_REQUEST_TIMEOUT_SECS).await;
    tokio::time::pause();

    let started = tokio::time::Instant::now();
    let response = get(app, "/api/dictionary/run").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(started.elapsed() < Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    let json = body_json(response).await;
    assert_eq!(json["word"], "run");
    assert_eq!(json["vietnamese"], GLOSS_PLACEHOLDER);
}

#[tokio::test]
async fn model_timeout_reaches_the_client_as_upstream_timeout() {
    let app = app_with_hanging_model(DEFAULT_REQUEST_TIMEOUT_SECS).await;
    tokio::time::pause();

    let response = post_json(
        app,
        "/api/ai/explain",
        json!({"text": "run", "context": "I run every day."}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_TIMEOUT");
}

#[tokio::test]
async fn request_deadline_answers_408_json() {
    let app = app_with_hanging_model(1).await;
    tokio::time::pause();

    let response = post_json(app, "/api/ai/summarize", json!({"content": "article"})).await;

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "REQUEST_TIMEOUT");
}
