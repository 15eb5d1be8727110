#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The service answered, but refused the request or sent something unusable.
    #[error("Upstream rejected the request: {0}")]
    UpstreamRejected(String),

    #[error("Malformed AI response: {0}")]
    MalformedAiResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// True when the service did not answer (timeout or unavailable).
    /// A rejection by a live service is not an outage.
    pub fn is_upstream_outage(&self) -> bool {
        matches!(
            self,
            CoreError::UpstreamTimeout(_) | CoreError::UpstreamUnavailable(_)
        )
    }
}
