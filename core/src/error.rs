//! Error types for the request client.
//!
//! # Design
//! Non-2xx responses are not interpreted: `Status` carries the raw response,
//! unparsed, so callers can inspect the status code, headers and body
//! themselves. Nothing here is retried or defaulted; every failure reaches
//! the caller.

use thiserror::Error;

use crate::http::HttpResponse;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `RequestClient` and its transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {}: {}", .0.status, .0.body)]
    Status(Box<HttpResponse>),

    /// The exchange could not complete (DNS, refused connection, unresolvable URL).
    #[error("transport failed: {0}")]
    Transport(#[source] BoxError),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ApiError {
    pub fn transport(error: impl Into<BoxError>) -> Self {
        ApiError::Transport(error.into())
    }

    /// Status code of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }

    /// The raw response behind a `Status` error.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ApiError::Status(response) => Some(response),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<HttpResponse> for ApiError {
    fn from(response: HttpResponse) -> Self {
        ApiError::Status(Box::new(response))
    }
}
