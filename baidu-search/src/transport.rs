//! HTTP transport capability consumed by the searcher.
//!
//! The searcher needs two things from the network: the HTML body of a
//! `GET` with query parameters, and the status line plus `Location`
//! headers of a request that does not follow redirects. [`Transport`]
//! exposes exactly that; [`HttpTransport`] implements it with reqwest.

use crate::config::HttpOptions;
use crate::error::SearchError;
use crate::http::{self, Redirects};
use reqwest::header::{HeaderValue, LOCATION};

/// Status and redirect targets of a header-only request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadResponse {
    /// HTTP status code.
    pub status: u16,
    /// Every `Location` header value, in the order received.
    pub locations: Vec<String>,
}

impl HeadResponse {
    pub fn new(status: u16, locations: Vec<String>) -> Self {
        Self { status, locations }
    }
}

/// Network operations the searcher depends on.
///
/// All implementations must be `Send + Sync` so redirect probes for one
/// page can run concurrently.
pub trait Transport: Send + Sync {
    /// `GET url?params` and return the body of a 2xx response.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure or a non-2xx
    /// status, [`SearchError::Timeout`] when the request times out.
    fn get_html(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> impl std::future::Future<Output = Result<String, SearchError>> + Send;

    /// Issue a header-only request to `url` without following redirects.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] or [`SearchError::Timeout`] when no
    /// response is received. Any received status, including 4xx and 5xx,
    /// is returned as a [`HeadResponse`].
    fn head(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<HeadResponse, SearchError>> + Send;
}

/// [`Transport`] backed by two reqwest clients built from the same [`HttpOptions`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    probe: reqwest::Client,
}

impl HttpTransport {
    /// Build the page and probe clients.
    ///
    /// The User-Agent is picked once per transport when none is configured.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] for invalid headers or proxy, or
    /// [`SearchError::Http`] if a client cannot be constructed.
    pub fn new(options: &HttpOptions) -> Result<Self, SearchError> {
        let options = match options.user_agent {
            Some(_) => options.clone(),
            None => HttpOptions {
                user_agent: Some(http::random_user_agent().to_owned()),
                ..options.clone()
            },
        };
        Ok(Self {
            client: http::build_client(&options, Redirects::Follow)?,
            probe: http::build_client(&options, Redirects::Manual)?,
        })
    }
}

impl Transport for HttpTransport {
    async fn get_html(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<String, SearchError> {
        tracing::trace!(url, "fetching result page");

        let response = self
            .client
            .get(url)
            .query(params)
            .header("Accept", "text/html,application/xhtml+xml")
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("request failed", e))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("unexpected status: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest("response read failed", e))?;

        tracing::trace!(bytes = html.len(), "result page received");
        Ok(html)
    }

    async fn head(&self, url: &str) -> Result<HeadResponse, SearchError> {
        tracing::trace!(url, "probing redirect");

        let response = self
            .probe
            .head(url)
            .send()
            .await
            .map_err(|e| SearchError::from_reqwest("redirect probe failed", e))?;

        let locations = response
            .headers()
            .get_all(LOCATION)
            .iter()
            .map(location_text)
            .collect();

        Ok(HeadResponse {
            status: response.status().as_u16(),
            locations,
        })
    }
}

/// Decode a `Location` value. Raw UTF-8 targets are kept, invalid bytes
/// become U+FFFD.
fn location_text(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}
