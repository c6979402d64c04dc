//! Error types for the baidu-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. Keywords are never embedded in messages.
//!
//! Missing markup is not an error here: absent titles, links, count nodes
//! or related-search regions degrade to empty strings, empty lists and
//! zero counts.

/// Errors that can occur while querying and extracting result pages.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A query argument was out of range (zero page number or page size).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The result page could not be fetched: transport failure or non-2xx status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A request exceeded the configured timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// A configured selector could not be compiled.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid searcher configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Map a [`reqwest::Error`] onto [`SearchError::Timeout`] or [`SearchError::Http`].
    pub(crate) fn from_reqwest(context: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{context}: {err}"))
        } else {
            Self::Http(format!("{context}: {err}"))
        }
    }
}

/// Convenience type alias for baidu-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
