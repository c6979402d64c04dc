//! # baidu-search
//!
//! Paginated result-page scraping for Baidu web search.
//!
//! Issues `GET https://www.baidu.com/s?wd=..&rn=..&pn=..` requests, slices the
//! returned HTML into ranked title/link records, reads the localized
//! "total results" figure, collects related-search suggestions, and can
//! resolve Baidu's redirect-wrapped links to their real destinations.
//!
//! ## Design
//!
//! - Selector-driven extraction over a narrow [`document::DocumentNode`]
//!   capability; [`scraper`] is the default binding
//! - Network access through the [`transport::Transport`] trait;
//!   [`transport::HttpTransport`] is the reqwest binding
//! - Graceful degradation: missing markup yields empty fields, empty lists
//!   and zero counts instead of errors
//! - Real-URL resolution follows one redirect hop per link, concurrently,
//!   and keeps the original link when a probe fails
//!
//! ## Security
//!
//! - Keywords and URLs are logged only at trace level
//! - No network listeners, no persisted state

pub mod config;
pub mod count;
pub mod document;
pub mod error;
pub mod extract;
pub mod http;
pub mod pagination;
pub mod query;
pub mod redirect;
pub mod related;
pub mod searcher;
pub mod transport;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use searcher::{BaiduSearcher, KeywordSearch};
pub use transport::{HttpTransport, Transport};
pub use types::{RelatedSearchSet, ResultRecord, SearchResultPage};

/// Fetch one result page for `keyword`.
///
/// Builds a [`BaiduSearcher`] from `config` for a single call. With
/// `real_url`, redirect links are resolved to their destinations.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid `config`,
/// [`SearchError::InvalidArgument`] for page 0, or the fetch error.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> baidu_search::Result<()> {
/// let config = baidu_search::SearchConfig::default();
/// let records = baidu_search::search_page("rust programming", 1, false, &config).await?;
/// for record in &records {
///     println!("{}: {}", record.title, record.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_page(
    keyword: &str,
    page: u32,
    real_url: bool,
    config: &SearchConfig,
) -> Result<SearchResultPage> {
    let searcher = BaiduSearcher::new(config.clone())?;
    searcher.search(keyword).page(page, real_url).await
}

/// Fetch the related-search suggestions for `keyword`.
///
/// # Errors
///
/// Same as [`search_page`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> baidu_search::Result<()> {
/// let config = baidu_search::SearchConfig::default();
/// let terms = baidu_search::related_searches("翟天临", &config).await?;
/// println!("{terms:?}");
/// # Ok(())
/// # }
/// ```
pub async fn related_searches(keyword: &str, config: &SearchConfig) -> Result<RelatedSearchSet> {
    let searcher = BaiduSearcher::new(config.clone())?;
    searcher.search(keyword).related_searches().await
}
