//! HTTP transport types shared by the client and its transports.
//!
//! # Design
//! Requests and responses are plain data. `RequestClient::build_request`
//! produces an `HttpRequest` without touching the network; a `Transport` (or
//! the host itself) executes it and hands back an `HttpResponse`, which the
//! configured resolver turns into a typed value.
//!
//! All fields use owned types so values can move across threads and await
//! points without lifetime concerns.

use std::fmt;

use http::Extensions;
use serde::Serialize;

use crate::error::ApiError;
use crate::headers::Headers;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

/// Payload of a body-bearing request.
///
/// Only `Json` is encoded by the client. `Raw` text and `Passthrough` bytes
/// (form data, files, anything already encoded) go on the wire untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(serde_json::Value),
    Raw(String),
    Passthrough(Vec<u8>),
}

impl Body {
    /// Encode any serializable value as JSON text right away.
    ///
    /// The value is written straight to text, never through a
    /// `serde_json::Value`, so struct field order and integers wider than
    /// 64 bits survive. The result is a `Raw` body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_string(value)
            .map(Body::Raw)
            .map_err(ApiError::Serialization)
    }

    /// Encode the payload into the bytes sent on the wire.
    pub fn into_bytes(self) -> Result<Vec<u8>, ApiError> {
        match self {
            Body::Json(value) => serde_json::to_vec(&value).map_err(ApiError::Serialization),
            Body::Raw(text) => Ok(text.into_bytes()),
            Body::Passthrough(bytes) => Ok(bytes),
        }
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Raw(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Raw(text.to_string())
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Passthrough(bytes)
    }
}

/// Per-call overrides.
///
/// `headers` are merged over the header policy's output, caller values
/// winning. `extensions` is an opaque type map handed to the transport as-is;
/// the client never reads it.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Headers,
    pub extensions: Extensions,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn extension<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        self.extensions.insert(value);
        self
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute when the client has a base URL, and origin-relative
/// (`/path`) otherwise; resolving a relative URL is the transport's job.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
    pub extensions: Extensions,
}

impl HttpRequest {
    /// The body as UTF-8 text, if there is one and it is valid UTF-8.
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
