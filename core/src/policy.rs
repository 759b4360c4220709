//! Header and response policies injected into `RequestClient`.
//!
//! # Design
//! Both steps are strategies chosen at construction. A client that needs an
//! `Authorization` header is a client built with `BearerAuth` (or any closure
//! `Fn(&Headers) -> Headers`), not a different client type.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::headers::Headers;
use crate::http::HttpResponse;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// `Content-Type: application/json`, the base of every default policy.
pub fn default_headers() -> Headers {
    Headers::from([(CONTENT_TYPE, APPLICATION_JSON)])
}

/// Produces the effective headers of a request from the caller's overrides.
pub trait HeaderPolicy: Send + Sync {
    fn headers(&self, overrides: &Headers) -> Headers;
}

impl<F> HeaderPolicy for F
where
    F: Fn(&Headers) -> Headers + Send + Sync,
{
    fn headers(&self, overrides: &Headers) -> Headers {
        self(overrides)
    }
}

/// Default policy: JSON content type, caller headers win.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonHeaders;

impl HeaderPolicy for JsonHeaders {
    fn headers(&self, overrides: &Headers) -> Headers {
        let mut headers = default_headers();
        headers.extend_from(overrides);
        headers
    }
}

/// JSON defaults plus `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth").field("token", &"<redacted>").finish()
    }
}

impl HeaderPolicy for BearerAuth {
    fn headers(&self, overrides: &Headers) -> Headers {
        let mut headers = default_headers();
        headers.insert(AUTHORIZATION, format!("Bearer {}", self.token));
        headers.extend_from(overrides);
        headers
    }
}

/// Turns a raw response into the caller's type or an error.
pub trait ResponseResolver: Send + Sync {
    fn resolve<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError>;
}

/// Default resolver: 2xx bodies are decoded as JSON, anything else fails
/// with the raw response attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawResponse;

impl ResponseResolver for RawResponse {
    fn resolve<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(response.into());
        }
        decode_json(&response)
    }
}

/// Decode the JSON body of a successful response.
///
/// `204 No Content` and `205 Reset Content` carry no body by definition and
/// read as `null`, which only types such as `()`, `Option<_>` or
/// `serde_json::Value` accept. Any other status needs a JSON body.
pub fn decode_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let bodiless = matches!(response.status, 204 | 205) && response.body.trim().is_empty();
    let text = if bodiless { "null" } else { response.body.as_str() };
    serde_json::from_str(text).map_err(ApiError::Deserialization)
}
