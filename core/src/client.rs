//! Typed JSON client over an injected transport.
//!
//! # Design
//! `RequestClient` holds its configuration, a transport, a header policy and
//! a response resolver, none of which change after construction. Every verb
//! method funnels into `request`, which is `build_request` (pure), one
//! `Transport::send`, then `resolve`. `build_request` and `resolve` are
//! public so a host can run the round-trip itself.

use serde::de::DeserializeOwned;

use crate::compose::compose_url;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{Body, HttpMethod, HttpRequest, HttpResponse, RequestOptions};
use crate::policy::{HeaderPolicy, JsonHeaders, RawResponse, ResponseResolver};
use crate::transport::{ReqwestTransport, Transport};

/// JSON request client.
///
/// `X` is the transport, `H` the header policy and `R` the response
/// resolver. The defaults send through `reqwest`, add
/// `Content-Type: application/json`, and fail non-2xx responses with the raw
/// response attached.
#[derive(Debug, Clone)]
pub struct RequestClient<X = ReqwestTransport, H = JsonHeaders, R = RawResponse> {
    config: ClientConfig,
    transport: X,
    header_policy: H,
    resolver: R,
}

impl RequestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::builder().config(config).build()
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ClientConfig::from(base_url))
    }

    pub fn builder() -> RequestClientBuilder {
        RequestClientBuilder {
            config: ClientConfig::default(),
            transport: ReqwestTransport::default(),
            header_policy: JsonHeaders,
            resolver: RawResponse,
        }
    }
}

impl<X, H, R> RequestClient<X, H, R>
where
    X: Transport,
    H: HeaderPolicy,
    R: ResponseResolver,
{
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &X {
        &self.transport
    }

    /// The URL a call to `endpoint` is sent to.
    pub fn url(&self, endpoint: &str) -> Result<String, ApiError> {
        compose_url(
            self.config.base_url.as_deref(),
            self.config.base_endpoint.as_deref(),
            endpoint,
        )
    }

    /// Build the request for `endpoint` without sending it.
    pub fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Body>,
        options: RequestOptions,
    ) -> Result<HttpRequest, ApiError> {
        let RequestOptions {
            headers,
            extensions,
        } = options;
        Ok(HttpRequest {
            method,
            url: self.url(endpoint)?,
            headers: self.header_policy.headers(&headers),
            body: body.map(Body::into_bytes).transpose()?,
            extensions,
        })
    }

    /// Interpret a response with the configured resolver.
    pub fn resolve<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        self.resolver.resolve(response)
    }

    /// Build, send and resolve a single request.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Body>,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let request = self.build_request(method, endpoint, body, options)?;
        let url = request.url.clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self
            .transport
            .send(request)
            .await
            .inspect_err(|err| tracing::warn!(%method, %url, error = %err, "transport failed"))?;

        if response.is_success() {
            tracing::debug!(%method, %url, status = response.status, "received response");
        } else {
            tracing::warn!(%method, %url, status = response.status, "request failed");
        }
        self.resolve(response)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.get_with(endpoint, RequestOptions::default()).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Get, endpoint, None, options).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
    ) -> Result<T, ApiError> {
        self.post_with(endpoint, body, RequestOptions::default()).await
    }

    pub async fn post_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Post, endpoint, Some(body.into()), options)
            .await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
    ) -> Result<T, ApiError> {
        self.put_with(endpoint, body, RequestOptions::default()).await
    }

    pub async fn put_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Put, endpoint, Some(body.into()), options)
            .await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
    ) -> Result<T, ApiError> {
        self.patch_with(endpoint, body, RequestOptions::default()).await
    }

    pub async fn patch_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: impl Into<Body>,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Patch, endpoint, Some(body.into()), options)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.delete_with(endpoint, RequestOptions::default()).await
    }

    pub async fn delete_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(HttpMethod::Delete, endpoint, None, options).await
    }
}

/// Assembles a `RequestClient` with non-default parts.
#[derive(Debug, Clone)]
pub struct RequestClientBuilder<X = ReqwestTransport, H = JsonHeaders, R = RawResponse> {
    config: ClientConfig,
    transport: X,
    header_policy: H,
    resolver: R,
}

impl<X, H, R> RequestClientBuilder<X, H, R> {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    pub fn base_endpoint(mut self, base_endpoint: impl Into<String>) -> Self {
        self.config.base_endpoint = Some(base_endpoint.into());
        self
    }

    pub fn transport<X2: Transport>(self, transport: X2) -> RequestClientBuilder<X2, H, R> {
        RequestClientBuilder {
            config: self.config,
            transport,
            header_policy: self.header_policy,
            resolver: self.resolver,
        }
    }

    pub fn header_policy<H2: HeaderPolicy>(self, header_policy: H2) -> RequestClientBuilder<X, H2, R> {
        RequestClientBuilder {
            config: self.config,
            transport: self.transport,
            header_policy,
            resolver: self.resolver,
        }
    }

    pub fn resolver<R2: ResponseResolver>(self, resolver: R2) -> RequestClientBuilder<X, H, R2> {
        RequestClientBuilder {
            config: self.config,
            transport: self.transport,
            header_policy: self.header_policy,
            resolver,
        }
    }

    pub fn build(self) -> RequestClient<X, H, R> {
        RequestClient {
            config: self.config,
            transport: self.transport,
            header_policy: self.header_policy,
            resolver: self.resolver,
        }
    }
}
