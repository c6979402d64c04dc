//! Query construction for a single result-page request.

use crate::config::QueryParams;
use crate::error::SearchError;

/// Keyword, page number and page size for one result-page request.
///
/// Built once per request and never mutated. Both `page_number` and
/// `page_size` are at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: String,
    page_number: u32,
    page_size: u32,
}

impl SearchQuery {
    /// Build a query for `page_number` (1-based) with `page_size` results per page.
    ///
    /// An empty keyword is accepted; what it returns is up to the engine.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] if `page_number` or
    /// `page_size` is zero.
    pub fn build(
        keyword: impl Into<String>,
        page_number: u32,
        page_size: u32,
    ) -> Result<Self, SearchError> {
        if page_number == 0 {
            return Err(SearchError::InvalidArgument(
                "page_number must be at least 1".into(),
            ));
        }
        if page_size == 0 {
            return Err(SearchError::InvalidArgument(
                "page_size must be greater than 0".into(),
            ));
        }
        Ok(Self {
            keyword: keyword.into(),
            page_number,
            page_size,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based count of results skipped before this page.
    pub fn offset(&self) -> u64 {
        offset(self.page_number, self.page_size)
    }

    /// Query parameters in request order: keyword, page size, offset.
    pub fn params(&self, names: &QueryParams) -> Vec<(String, String)> {
        vec![
            (names.keyword.clone(), self.keyword.clone()),
            (names.page_size.clone(), self.page_size.to_string()),
            (names.offset.clone(), self.offset().to_string()),
        ]
    }
}

/// `page_size * (page_number - 1)`, computed in `u64` so it cannot overflow.
///
/// Callers go through [`SearchQuery::build`], which guarantees
/// `page_number >= 1`; a zero page number saturates to offset 0.
pub fn offset(page_number: u32, page_size: u32) -> u64 {
    u64::from(page_size) * u64::from(page_number.saturating_sub(1))
}
