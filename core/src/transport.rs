//! The network boundary.
//!
//! # Design
//! `RequestClient` never performs I/O itself; it hands a finished
//! `HttpRequest` to a `Transport`. Implement the trait with any HTTP library
//! (or a fake in tests). `ReqwestTransport` is the default.
//!
//! A transport sends exactly one request per call and returns whatever status
//! the server answered with. Interpreting the status is the resolver's job.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::ApiError;
use crate::headers::Headers;
use crate::http::{HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request).await
    }
}

/// Per-request deadline, passed through `RequestOptions::extension`.
///
/// Covers the whole exchange, from connecting until the body has been read.
/// Running out of time fails the call with a transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout(pub Duration);

/// `reqwest`-backed transport.
///
/// Origin-relative URLs (`/path`) are resolved against `origin`; without one
/// they fail as a transport error. Of the request extensions only `Timeout`
/// is read.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    origin: Option<Url>,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            origin: None,
        }
    }

    /// Origin used for origin-relative URLs.
    pub fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    fn resolve_url(&self, url: &str) -> Result<Url, ApiError> {
        let invalid = |source| ApiError::InvalidUrl {
            url: url.to_string(),
            source,
        };
        if !url.starts_with('/') {
            return Url::parse(url).map_err(invalid);
        }
        match &self.origin {
            Some(origin) => origin.join(url).map_err(invalid),
            None => Err(ApiError::transport(format!(
                "relative URL `{url}` needs an origin"
            ))),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.resolve_url(&request.url)?;
        let mut builder = self.client.request(request.method.into(), url);
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(Timeout(limit)) = request.extensions.get::<Timeout>() {
            builder = builder.timeout(*limit);
        }

        let response = builder.send().await.map_err(ApiError::transport)?;
        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(ApiError::transport)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_used_as_is() {
        let url = ReqwestTransport::new()
            .resolve_url("http://localhost:3000/api/items")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/items");
    }

    #[test]
    fn relative_urls_resolve_against_origin() {
        let transport =
            ReqwestTransport::new().with_origin(Url::parse("https://app.example.com").unwrap());
        let url = transport.resolve_url("/api/items").unwrap();
        assert_eq!(url.as_str(), "https://app.example.com/api/items");
    }

    #[test]
    fn timeout_travels_in_request_options() {
        let options = crate::http::RequestOptions::new().extension(Timeout(Duration::from_secs(2)));
        assert_eq!(
            options.extensions.get::<Timeout>(),
            Some(&Timeout(Duration::from_secs(2)))
        );
    }

    #[test]
    fn relative_urls_without_origin_fail() {
        let err = ReqwestTransport::new().resolve_url("/api/items").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
