//! Client configuration.

use serde::{Deserialize, Serialize};

/// Where requests are sent.
///
/// Both fields are optional. Without `base_url` every composed URL is
/// origin-relative and the transport decides which origin it resolves
/// against. `base_endpoint` is a path prefix placed before every endpoint;
/// surrounding `/` separators are tolerated on both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub base_endpoint: Option<String>,
}

impl ClientConfig {
    pub const BASE_URL_VAR: &'static str = "REQUEST_CLIENT_BASE_URL";
    pub const BASE_ENDPOINT_VAR: &'static str = "REQUEST_CLIENT_BASE_ENDPOINT";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_base_endpoint(mut self, base_endpoint: impl Into<String>) -> Self {
        self.base_endpoint = Some(base_endpoint.into());
        self
    }

    /// Read `REQUEST_CLIENT_BASE_URL` and `REQUEST_CLIENT_BASE_ENDPOINT`.
    /// Unset or empty variables leave the field unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            base_url: read(Self::BASE_URL_VAR),
            base_endpoint: read(Self::BASE_ENDPOINT_VAR),
        }
    }
}

impl From<&str> for ClientConfig {
    fn from(base_url: &str) -> Self {
        ClientConfig::new().with_base_url(base_url)
    }
}
