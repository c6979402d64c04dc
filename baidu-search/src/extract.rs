//! Result extraction: slice a result page into ranked records.

use crate::config::ResultSelectors;
use crate::document::{DocumentNode, HtmlDocument};
use crate::error::SearchError;
use crate::types::{ResultRecord, SearchResultPage};

/// Map every results container under `root` to a [`ResultRecord`].
///
/// One record is produced per container, in document order. A container
/// without a title or link node still yields a record, with that field
/// left empty.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] only if a selector is invalid.
pub fn extract_results<N: DocumentNode>(
    root: &N,
    selectors: &ResultSelectors,
) -> Result<SearchResultPage, SearchError> {
    let mut records = Vec::new();

    for container in root.select(&selectors.container)? {
        let title = container
            .select_first(&selectors.title)?
            .map(|node| node.text())
            .unwrap_or_default();

        let link = container
            .select_first(&selectors.link)?
            .and_then(|node| node.attr(&selectors.link_attr))
            .unwrap_or_default();

        records.push(ResultRecord { title, link });
    }

    Ok(records)
}

/// Parse result-page HTML and extract its records.
pub fn parse_results_html(
    html: &str,
    selectors: &ResultSelectors,
) -> Result<SearchResultPage, SearchError> {
    let document = HtmlDocument::parse(html);
    let records = extract_results(&document.root(), selectors)?;
    tracing::debug!(count = records.len(), "result records parsed");
    Ok(records)
}
