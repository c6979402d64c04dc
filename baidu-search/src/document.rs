//! Document query capability used by the extractors.
//!
//! Extraction only needs three operations on a parsed page: select
//! descendants by CSS selector, read a node's text, and read an attribute.
//! [`DocumentNode`] captures exactly that, so the extractors can run
//! against [`HtmlNode`] (backed by [`scraper`]) or any fake document in
//! tests.

use crate::error::SearchError;
use scraper::{ElementRef, Html, Selector};

/// A node in a parsed result page that can be queried by selector.
pub trait DocumentNode: Sized {
    /// All descendants matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] if `selector` is not a valid selector.
    fn select(&self, selector: &str) -> Result<Vec<Self>, SearchError>;

    /// Concatenated, trimmed text content of this node and its descendants.
    fn text(&self) -> String;

    /// Value of attribute `name`, if present.
    fn attr(&self, name: &str) -> Option<String>;

    /// The first descendant matching `selector`, if any.
    fn select_first(&self, selector: &str) -> Result<Option<Self>, SearchError> {
        Ok(self.select(selector)?.into_iter().next())
    }
}

/// An HTML result page parsed with [`scraper`].
///
/// `scraper::Html` is not `Send`, so documents are parsed and queried
/// synchronously and dropped before any `.await`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Malformed markup is recovered, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The root element to run selectors against.
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode {
            element: self.html.root_element(),
        }
    }
}

/// An element of an [`HtmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
}

impl DocumentNode for HtmlNode<'_> {
    fn select(&self, selector: &str) -> Result<Vec<Self>, SearchError> {
        let selector = compile(selector)?;
        Ok(self
            .element
            .select(&selector)
            .map(|element| HtmlNode { element })
            .collect())
    }

    fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.element.value().attr(name).map(str::to_string)
    }
}

fn compile(selector: &str) -> Result<Selector, SearchError> {
    Selector::parse(selector)
        .map_err(|e| SearchError::Parse(format!("invalid selector `{selector}`: {e:?}")))
}
