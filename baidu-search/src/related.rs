//! Related-search suggestions.
//!
//! Baidu renders suggestions as a table under `#rs`, one `<th>` per term.
//! Terms are flattened row by row, left to right, and kept as-is: no
//! deduplication, no reordering.

use crate::config::RelatedSelectors;
use crate::document::{DocumentNode, HtmlDocument};
use crate::error::SearchError;
use crate::types::RelatedSearchSet;

/// Collect every term cell of every row of every matching region.
///
/// An absent region yields an empty set.
pub fn extract_related<N: DocumentNode>(
    root: &N,
    selectors: &RelatedSelectors,
) -> Result<RelatedSearchSet, SearchError> {
    let mut terms = Vec::new();
    for region in root.select(&selectors.region)? {
        for row in region.select(&selectors.row)? {
            for cell in row.select(&selectors.term)? {
                terms.push(cell.text());
            }
        }
    }
    Ok(terms)
}

/// Parse result-page HTML and extract its related searches.
pub fn parse_related_html(
    html: &str,
    selectors: &RelatedSelectors,
) -> Result<RelatedSearchSet, SearchError> {
    let document = HtmlDocument::parse(html);
    let terms = extract_related(&document.root(), selectors)?;
    tracing::debug!(count = terms.len(), "related searches parsed");
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fake::FakeNode;

    const MOCK_RS_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div id="rs"><div class="tt">相关搜索</div>
<table>
  <tr><th><a href="/s?wd=a">翟天临论文</a></th><td></td><th><a href="/s?wd=b">翟天临学历</a></th></tr>
  <tr><th><a href="/s?wd=c">翟天临知网</a></th><td></td><th><a href="/s?wd=a">翟天临论文</a></th></tr>
</table>
</div>
</body>
</html>"#;

    #[test]
    fn flattens_rows_in_order_and_keeps_duplicates() {
        let terms = parse_related_html(MOCK_RS_HTML, &RelatedSelectors::default())
            .expect("should parse");
        assert_eq!(terms, ["翟天临论文", "翟天临学历", "翟天临知网", "翟天临论文"]);
    }

    #[test]
    fn missing_region_is_empty() {
        let terms = parse_related_html(
            "<html><body><div id=\"content_left\"></div></body></html>",
            &RelatedSelectors::default(),
        )
        .expect("should parse");
        assert!(terms.is_empty());
    }

    #[test]
    fn table_outside_region_is_ignored() {
        let html = r#"<html><body>
<table><tr><th>not related</th></tr></table>
<div id="rs"><table><tr><th>related</th></tr></table></div>
</body></html>"#;
        let terms = parse_related_html(html, &RelatedSelectors::default()).expect("should parse");
        assert_eq!(terms, ["related"]);
    }

    #[test]
    fn fake_document_row_major_order() {
        let row = |a: &str, b: &str| {
            FakeNode::new("row")
                .child(FakeNode::new("term").with_text(a))
                .child(FakeNode::new("term").with_text(b))
        };
        let root = FakeNode::new("root").child(
            FakeNode::new("region")
                .child(row("top-left", "top-right"))
                .child(row("bottom-left", "bottom-right")),
        );
        let selectors = RelatedSelectors {
            region: "region".into(),
            row: "row".into(),
            term: "term".into(),
        };
        let terms = extract_related(&root, &selectors).expect("should extract");
        assert_eq!(terms, ["top-left", "top-right", "bottom-left", "bottom-right"]);
    }

    #[test]
    fn fixture_related_searches() {
        let html = include_str!("../test-data/baidu.html");
        let terms = parse_related_html(html, &RelatedSelectors::default()).expect("should parse");
        assert_eq!(terms.len(), 9);
        assert_eq!(terms[0], "翟天临论文");
        assert_eq!(terms[8], "翟天临北大博士后");
    }
}
