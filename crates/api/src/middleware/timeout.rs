//! JSON body for requests cut off by the whole-request timeout.
//!
//! `tower_http`'s `TimeoutLayer` answers with an empty 408.
//! [`request_timeout_as_json`] runs outside it and swaps that for an
//! [`AppError::RequestTimeout`] body.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Replace a bodyless 408 with the API's error shape.
pub async fn request_timeout_as_json(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }

    tracing::warn!("Request exceeded the server timeout");
    AppError::RequestTimeout.into_response()
}
