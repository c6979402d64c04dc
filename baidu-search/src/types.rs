//! Record types produced by result-page extraction.

use serde::{Deserialize, Serialize};

/// A single ranked result extracted from a result page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Text of the result heading. Empty when the page had no title node.
    pub title: String,
    /// Destination link. Usually an engine redirect URL until resolved;
    /// empty when the page had no link node.
    pub link: String,
}

impl ResultRecord {
    /// Build a record from a title and link.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// One page of results in document (ranking) order.
pub type SearchResultPage = Vec<ResultRecord>;

/// Related-search suggestion terms in row-major document order.
pub type RelatedSearchSet = Vec<String>;
