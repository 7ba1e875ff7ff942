//! Teamtailor API error types.

use thiserror::Error;

/// Result type for Teamtailor API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`TeamtailorClient`](super::TeamtailorClient).
///
/// Status codes are not special-cased: a 404 and a 429 both surface as
/// [`ApiError::Http`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL (or a URL derived from it) is not a valid absolute URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The upstream host could not be reached, or the response body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The upstream API answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The upstream API answered 2xx but the body was not the expected JSON document.
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create an HTTP status error.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code, if the upstream API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
