//! HTTP client construction with User-Agent rotation.
//!
//! Builds [`reqwest::Client`]s from [`HttpOptions`]: browser-like
//! User-Agent, optional proxy, cookie store and timeout. Result pages are
//! fetched with redirects followed; redirect probes use a client that never
//! follows them so the `Location` header stays observable.

use crate::config::HttpOptions;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Redirect behaviour of a built client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirects {
    /// Follow up to 10 redirects transparently (result-page fetches).
    Follow,
    /// Surface 3xx responses to the caller (redirect probes).
    Manual,
}

/// Build a [`reqwest::Client`] configured from `options`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if a header or the proxy URL is invalid,
/// or [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(
    options: &HttpOptions,
    redirects: Redirects,
) -> Result<reqwest::Client, SearchError> {
    let ua = match options.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    let policy = match redirects {
        Redirects::Follow => reqwest::redirect::Policy::limited(10),
        Redirects::Manual => reqwest::redirect::Policy::none(),
    };

    let mut builder = reqwest::Client::builder()
        .cookie_store(options.cookie_store)
        .timeout(Duration::from_secs(options.timeout_seconds))
        .user_agent(ua)
        .default_headers(header_map(&options.headers)?)
        .redirect(policy);

    if let Some(ref proxy) = options.proxy {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| SearchError::Config(format!("invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Convert configured header pairs into a [`HeaderMap`].
fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, SearchError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| SearchError::Config(format!("invalid header name `{name}`: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| SearchError::Config(format!("invalid value for header `{name}`: {e}")))?;
        map.append(name, value);
    }
    Ok(map)
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}
