//! Typed JSON HTTP client.
//!
//! # Overview
//! `RequestClient` composes a URL from a base URL, an optional base endpoint
//! and a per-call endpoint, attaches headers from a header policy, encodes
//! the body, sends exactly one request through a `Transport`, and resolves
//! the response into the caller's type.
//!
//! # Design
//! - Configuration, transport and policies are fixed at construction; the
//!   client holds no mutable state, so concurrent calls never interact.
//! - Header handling and response handling are injected strategies
//!   (`HeaderPolicy`, `ResponseResolver`) rather than overridable methods.
//! - `build_request` and `resolve` are pure, so the I/O boundary is explicit
//!   and a host may execute the request itself.
//! - Non-2xx responses fail with the raw `HttpResponse` attached. There is
//!   no retry or caching; a deadline is opt-in per call via `Timeout`.

pub mod client;
pub mod compose;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod policy;
pub mod transport;

pub use client::{RequestClient, RequestClientBuilder};
pub use config::ClientConfig;
pub use error::{ApiError, BoxError};
pub use headers::Headers;
pub use self::http::{Body, HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use policy::{BearerAuth, HeaderPolicy, JsonHeaders, RawResponse, ResponseResolver};
pub use transport::{ReqwestTransport, Timeout, Transport};
