//! URL composition for request endpoints.
//!
//! `base_url`, `base_endpoint` and the call's endpoint are joined with exactly
//! one `/` between non-empty path parts. Separators around the path segments
//! are stripped first, so `"/api/"` + `"/items/"` and `"api"` + `"items"`
//! compose to the same URL. Only the path is touched: a query string or
//! fragment on the endpoint is carried over verbatim, and a query already on
//! the base URL is kept ahead of the endpoint's.

use url::Url;

use crate::error::ApiError;

/// Strip the `/` separators surrounding a path segment.
pub fn trim_separators(segment: &str) -> &str {
    segment.trim_matches('/')
}

/// Split an endpoint into its path and the `?query#fragment` suffix.
pub fn split_path(endpoint: &str) -> (&str, &str) {
    match endpoint.find(|c: char| c == '?' || c == '#') {
        Some(index) => endpoint.split_at(index),
        None => (endpoint, ""),
    }
}

/// Join `base_endpoint` and the endpoint's path into a path without
/// surrounding separators. Empty parts are skipped.
pub fn join_path(base_endpoint: Option<&str>, endpoint_path: &str) -> String {
    [base_endpoint.unwrap_or(""), endpoint_path]
        .into_iter()
        .map(trim_separators)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Query and fragment of a `?query#fragment` suffix. An empty query is `None`.
fn split_suffix(suffix: &str) -> (Option<&str>, Option<&str>) {
    let (rest, fragment) = match suffix.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (suffix, None),
    };
    let query = rest.strip_prefix('?').filter(|query| !query.is_empty());
    (query, fragment)
}

/// Compose the final request URL.
///
/// With a base URL the result is absolute and validated. Without one the
/// result is origin-relative, always starting with `/`.
pub fn compose_url(
    base_url: Option<&str>,
    base_endpoint: Option<&str>,
    endpoint: &str,
) -> Result<String, ApiError> {
    let (endpoint_path, suffix) = split_path(endpoint);
    let path = join_path(base_endpoint, endpoint_path);

    let Some(base) = base_url.filter(|b| !b.trim().is_empty()) else {
        return Ok(format!("/{path}{suffix}"));
    };

    let mut url = Url::parse(base).map_err(|source| ApiError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;

    let base_path = url.path().trim_end_matches('/').to_string();
    if path.is_empty() {
        url.set_path(&base_path);
    } else {
        url.set_path(&format!("{base_path}/{path}"));
    }

    let (query, fragment) = split_suffix(suffix);
    if let Some(query) = query {
        let merged = match url.query().filter(|existing| !existing.is_empty()) {
            Some(existing) => format!("{existing}&{query}"),
            None => query.to_string(),
        };
        url.set_query(Some(&merged));
    }
    if fragment.is_some() {
        url.set_fragment(fragment);
    }

    Ok(url.into())
}
