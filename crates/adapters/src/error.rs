use smartnews_core::error::CoreError;

/// Errors from calling an external service.
///
/// Every variant names the service so log lines and error bodies say
/// which collaborator failed.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// A required credential or URL is missing from configuration.
    #[error("{service} is not configured ({setting} is not set)")]
    NotConfigured {
        service: &'static str,
        setting: &'static str,
    },

    /// A configured base URL cannot be parsed or extended.
    #[error("{service} has an invalid URL: {url}")]
    InvalidUrl { service: &'static str, url: String },

    /// The request exceeded the client's timeout.
    #[error("{service} did not respond in time")]
    Timeout { service: &'static str },

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service returned a non-2xx status code.
    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// The service answered 2xx with a body we cannot use.
    #[error("{service} sent an unexpected response: {detail}")]
    Decode {
        service: &'static str,
        detail: String,
    },
}

impl AdapterError {
    /// Classify a reqwest error, separating timeouts from other failures.
    pub fn from_reqwest(service: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            AdapterError::Timeout { service }
        } else {
            AdapterError::Request { service, source }
        }
    }
}

impl From<AdapterError> for CoreError {
    fn from(err: AdapterError) -> Self {
        let message = err.to_string();
        match err {
            AdapterError::Timeout { .. } => CoreError::UpstreamTimeout(message),
            AdapterError::Status { status, .. } if status < 500 => {
                CoreError::UpstreamRejected(message)
            }
            AdapterError::Decode { .. } => CoreError::UpstreamRejected(message),
            AdapterError::NotConfigured { .. }
            | AdapterError::InvalidUrl { .. }
            | AdapterError::Request { .. }
            | AdapterError::Status { .. } => CoreError::UpstreamUnavailable(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn timeout_maps_to_upstream_timeout() {
        let err: CoreError = AdapterError::Timeout { service: "Gemini" }.into();
        assert_matches!(err, CoreError::UpstreamTimeout(msg) if msg.contains("Gemini"));
    }

    #[test]
    fn status_maps_to_upstream_unavailable() {
        let err: CoreError = AdapterError::Status {
            service: "The Guardian",
            status: 502,
            body: "bad gateway".into(),
        }
        .into();
        assert_matches!(err, CoreError::UpstreamUnavailable(msg) if msg.contains("HTTP 502"));
    }

    #[test]
    fn client_error_status_is_a_rejection_not_an_outage() {
        let err: CoreError = AdapterError::Status {
            service: "LibreTranslate",
            status: 400,
            body: "xx is not supported".into(),
        }
        .into();
        assert_matches!(&err, CoreError::UpstreamRejected(msg) if msg.contains("HTTP 400"));
        assert!(!err.is_upstream_outage());
    }

    #[test]
    fn undecodable_body_is_a_rejection() {
        let err: CoreError = AdapterError::Decode {
            service: "LibreTranslate",
            detail: "missing translatedText".into(),
        }
        .into();
        assert_matches!(err, CoreError::UpstreamRejected(_));
    }

    #[test]
    fn not_configured_names_the_setting() {
        let err = AdapterError::NotConfigured {
            service: "Merriam-Webster",
            setting: "MW_API_KEY",
        };
        assert_eq!(
            err.to_string(),
            "Merriam-Webster is not configured (MW_API_KEY is not set)"
        );
    }

    #[test]
    fn request_error_display() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = AdapterError::from_reqwest("LibreTranslate", req_err);
        assert!(err.to_string().contains("LibreTranslate request failed"));
    }
}
