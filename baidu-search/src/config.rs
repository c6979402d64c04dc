//! Searcher configuration with Baidu defaults.
//!
//! [`SearchConfig`] controls the endpoint, query parameter names, page size,
//! CSS selectors, HTTP options and redirect resolution. Selectors are plain
//! strings so they can be overridden when the target markup changes.

use crate::error::SearchError;

/// Default result-page endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.baidu.com/s";

/// Default number of results requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Configuration for a [`crate::BaiduSearcher`].
///
/// Use [`Default::default()`] for Baidu defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Result-page URL the query parameters are appended to.
    pub endpoint: String,
    /// Results requested per page. Also the divisor for page counts.
    pub page_size: u32,
    /// Names of the keyword, page-size and offset query parameters.
    pub params: QueryParams,
    /// CSS selectors used against fetched result pages.
    pub selectors: Selectors,
    /// Options passed through to the HTTP transport.
    pub http: HttpOptions,
    /// Real-URL resolution behaviour.
    pub redirect: RedirectOptions,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            params: QueryParams::default(),
            selectors: Selectors::default(),
            http: HttpOptions::default(),
            redirect: RedirectOptions::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `endpoint` must not be empty
    /// - `page_size` must be greater than 0
    /// - `http.timeout_seconds` must be greater than 0
    /// - `redirect.max_hops` and `redirect.concurrency` must be greater than 0
    /// - every selector must be non-empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.endpoint.trim().is_empty() {
            return Err(SearchError::Config("endpoint must not be empty".into()));
        }
        if self.page_size == 0 {
            return Err(SearchError::Config(
                "page_size must be greater than 0".into(),
            ));
        }
        if self.http.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.redirect.max_hops == 0 {
            return Err(SearchError::Config(
                "redirect max_hops must be greater than 0".into(),
            ));
        }
        if self.redirect.concurrency == 0 {
            return Err(SearchError::Config(
                "redirect concurrency must be greater than 0".into(),
            ));
        }
        if let Some(name) = self.selectors.first_empty() {
            return Err(SearchError::Config(format!(
                "selector `{name}` must not be empty"
            )));
        }
        Ok(())
    }
}

/// Query parameter names sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Search term parameter (`wd`).
    pub keyword: String,
    /// Results-per-request parameter (`rn`).
    pub page_size: String,
    /// Zero-based result offset parameter (`pn`).
    pub offset: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            keyword: "wd".into(),
            page_size: "rn".into(),
            offset: "pn".into(),
        }
    }
}

/// All selectors used against a result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    pub results: ResultSelectors,
    pub related: RelatedSelectors,
    /// Node whose text holds the localized total-results figure.
    pub count: String,
}

impl Selectors {
    fn first_empty(&self) -> Option<&'static str> {
        [
            ("results.container", &self.results.container),
            ("results.title", &self.results.title),
            ("results.link", &self.results.link),
            ("results.link_attr", &self.results.link_attr),
            ("related.region", &self.related.region),
            ("related.row", &self.related.row),
            ("related.term", &self.related.term),
            ("count", &self.count),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Selectors slicing a page into ranked result records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSelectors {
    /// One match per ranked result.
    pub container: String,
    /// Title node, relative to the container.
    pub title: String,
    /// Link node, relative to the container.
    pub link: String,
    /// Attribute of the link node holding the destination URL.
    pub link_attr: String,
}

impl Default for ResultSelectors {
    fn default() -> Self {
        Self {
            container: ".result".into(),
            title: "h3".into(),
            link: "h3>a".into(),
            link_attr: "href".into(),
        }
    }
}

/// Selectors for the related-searches table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedSelectors {
    /// The related-searches region.
    pub region: String,
    /// Rows within the region.
    pub row: String,
    /// Term cells within a row.
    pub term: String,
}

impl Default for RelatedSelectors {
    fn default() -> Self {
        Self {
            region: "#rs>table".into(),
            row: "tr".into(),
            term: "th".into(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            results: ResultSelectors::default(),
            related: RelatedSelectors::default(),
            count: ".nums".into(),
        }
    }
}

/// HTTP options passed through to the transport unmodified.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Extra request headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Proxy URL applied to all schemes, e.g. `http://127.0.0.1:8080`.
    pub proxy: Option<String>,
    /// Keep a cookie store across requests made by one transport.
    pub cookie_store: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout_seconds: 8,
            user_agent: None,
            headers: Vec::new(),
            proxy: None,
            cookie_store: true,
        }
    }
}

/// Real-URL resolution behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectOptions {
    /// Redirect hops followed per link. `1` resolves a single hop only.
    pub max_hops: usize,
    /// Maximum resolution requests in flight for one page.
    pub concurrency: usize,
}

impl Default for RedirectOptions {
    fn default() -> Self {
        Self {
            max_hops: 1,
            concurrency: 4,
        }
    }
}
