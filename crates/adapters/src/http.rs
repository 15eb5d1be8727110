//! Shared reqwest plumbing for the upstream clients.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::AdapterError;

/// Longest upstream error body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Build a client whose every request is bounded by `timeout`.
pub(crate) fn build_client(
    service: &'static str,
    timeout: Duration,
) -> Result<reqwest::Client, AdapterError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AdapterError::from_reqwest(service, e))
}

/// Return the response unchanged on 2xx, otherwise an
/// [`AdapterError::Status`] carrying the (shortened) body text.
pub(crate) async fn ensure_success(
    service: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, AdapterError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(AdapterError::Status {
        service,
        status: status.as_u16(),
        body: smartnews_core::text::truncate_chars(&body, MAX_ERROR_BODY_CHARS).to_string(),
    })
}

/// Check the status and decode a JSON body.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    service: &'static str,
    response: reqwest::Response,
) -> Result<T, AdapterError> {
    let response = ensure_success(service, response).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AdapterError::from_reqwest(service, e))?;
    serde_json::from_slice(&bytes).map_err(|e| AdapterError::Decode {
        service,
        detail: e.to_string(),
    })
}

/// Send a prepared request, classifying transport failures.
pub(crate) async fn send(
    service: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, AdapterError> {
    request
        .send()
        .await
        .map_err(|e| AdapterError::from_reqwest(service, e))
}
