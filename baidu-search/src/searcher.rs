//! Caller-facing searcher: explicit construction, per-keyword handles.
//!
//! A [`BaiduSearcher`] owns a validated [`SearchConfig`] and a
//! [`Transport`]. Binding a keyword with [`BaiduSearcher::search`] returns a
//! [`KeywordSearch`] whose methods each fetch one fresh result page and
//! route it to the matching extractor.

use crate::config::{HttpOptions, SearchConfig};
use crate::count::{parse_count_html, CountFormat};
use crate::error::SearchError;
use crate::extract::parse_results_html;
use crate::pagination::page_count;
use crate::query::SearchQuery;
use crate::redirect::resolve_links;
use crate::related::parse_related_html;
use crate::transport::{HttpTransport, Transport};
use crate::types::{RelatedSearchSet, SearchResultPage};

/// Paginated result-page client.
///
/// Holds no per-request state; one searcher can serve any number of
/// keywords and pages.
#[derive(Debug)]
pub struct BaiduSearcher<T = HttpTransport> {
    transport: T,
    config: SearchConfig,
    count_format: CountFormat,
}

impl BaiduSearcher<HttpTransport> {
    /// Build a searcher with the reqwest transport configured from `config.http`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, or the
    /// transport construction error.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let transport = HttpTransport::new(&config.http)?;
        Self::with_transport(transport, config)
    }

    /// Replace the HTTP options, rebuilding the transport.
    pub fn with_http_options(self, http: HttpOptions) -> Result<Self, SearchError> {
        let config = SearchConfig { http, ..self.config };
        config.validate()?;
        let transport = HttpTransport::new(&config.http)?;
        Ok(Self {
            transport,
            config,
            count_format: self.count_format,
        })
    }
}

impl<T: Transport> BaiduSearcher<T> {
    /// Build a searcher over any [`Transport`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn with_transport(transport: T, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            transport,
            config,
            count_format: CountFormat::comma().clone(),
        })
    }

    /// Use a different digit-grouping locale for result counts.
    pub fn with_count_format(mut self, format: CountFormat) -> Self {
        self.count_format = format;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Bind `keyword` for subsequent page, count and related-search calls.
    pub fn search(&self, keyword: impl Into<String>) -> KeywordSearch<'_, T> {
        KeywordSearch {
            searcher: self,
            keyword: keyword.into(),
        }
    }
}

/// A keyword bound to a [`BaiduSearcher`].
#[derive(Debug)]
pub struct KeywordSearch<'a, T> {
    searcher: &'a BaiduSearcher<T>,
    keyword: String,
}

impl<T: Transport> KeywordSearch<'_, T> {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The query that [`page`](Self::page) would send for `page_number`.
    pub fn query(&self, page_number: u32) -> Result<SearchQuery, SearchError> {
        SearchQuery::build(
            self.keyword.clone(),
            page_number,
            self.searcher.config.page_size,
        )
    }

    /// Fetch page `page_number` (1-based) and extract its records.
    ///
    /// With `real_url`, every record's link is replaced by its redirect
    /// target. Links that fail to resolve are kept as fetched.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] for page 0, or the fetch
    /// error if the page cannot be retrieved.
    pub async fn page(
        &self,
        page_number: u32,
        real_url: bool,
    ) -> Result<SearchResultPage, SearchError> {
        let html = self.fetch(page_number).await?;
        let records = parse_results_html(&html, &self.searcher.config.selectors.results)?;

        if !real_url {
            return Ok(records);
        }
        Ok(resolve_links(
            &self.searcher.transport,
            records,
            self.searcher.config.redirect,
        )
        .await)
    }

    /// Related-search suggestions shown on the first page.
    pub async fn related_searches(&self) -> Result<RelatedSearchSet, SearchError> {
        let html = self.fetch(1).await?;
        parse_related_html(&html, &self.searcher.config.selectors.related)
    }

    /// Total result count reported on the first page, 0 if absent or unreadable.
    pub async fn count(&self) -> Result<u64, SearchError> {
        let html = self.fetch(1).await?;
        parse_count_html(
            &html,
            &self.searcher.config.selectors.count,
            &self.searcher.count_format,
        )
    }

    /// Total page count at the configured page size.
    pub async fn count_page(&self) -> Result<u64, SearchError> {
        let count = self.count().await?;
        page_count(count, self.searcher.config.page_size)
    }

    async fn fetch(&self, page_number: u32) -> Result<String, SearchError> {
        let query = self.query(page_number)?;
        tracing::trace!(
            keyword = query.keyword(),
            page = page_number,
            offset = query.offset(),
            "result page requested"
        );
        let params = query.params(&self.searcher.config.params);
        self.searcher
            .transport
            .get_html(&self.searcher.config.endpoint, &params)
            .await
    }
}
