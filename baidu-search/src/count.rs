//! Total-result count parsing from localized text.
//!
//! Result pages render the total as free-form text such as
//! `百度为您找到相关结果约1,830,000个` or `About 45,600 results`. All locale
//! rules (which characters group digits) live in [`CountFormat`].

use std::sync::OnceLock;

use regex::Regex;

use crate::document::{DocumentNode, HtmlDocument};
use crate::error::SearchError;

/// Digit grouping rules for one locale.
#[derive(Debug, Clone)]
pub struct CountFormat {
    separators: Vec<char>,
    pattern: Regex,
}

impl CountFormat {
    /// A format whose digit runs may contain any of `separators`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `separators` contains an ASCII digit.
    pub fn new(separators: &[char]) -> Result<Self, SearchError> {
        if separators.iter().any(char::is_ascii_digit) {
            return Err(SearchError::Config(
                "count separators must not be digits".into(),
            ));
        }
        let class: String = separators
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        // A run must start with a digit so a stray separator never counts.
        let pattern = Regex::new(&format!(r"[0-9][0-9{class}]*"))
            .map_err(|e| SearchError::Config(format!("invalid count separators: {e}")))?;
        Ok(Self {
            separators: separators.to_vec(),
            pattern,
        })
    }

    /// Comma grouping, as used by Baidu and English locales.
    #[allow(clippy::expect_used)]
    pub fn comma() -> &'static CountFormat {
        static COMMA: OnceLock<CountFormat> = OnceLock::new();
        COMMA.get_or_init(|| Self::new(&[',']).expect("comma count pattern compiles"))
    }

    /// Parse the first digit run in `text`, ignoring grouping separators.
    ///
    /// Returns 0 when there is no digit run or the value overflows `u64`.
    pub fn parse(&self, text: &str) -> u64 {
        let Some(run) = self.pattern.find(text) else {
            return 0;
        };
        let digits: String = run
            .as_str()
            .chars()
            .filter(|c| !self.separators.contains(c))
            .collect();
        digits.parse().unwrap_or(0)
    }
}

/// Parse a result count with comma grouping.
///
/// ```
/// use baidu_search::count::parse_count;
///
/// assert_eq!(parse_count("About 1,234,567 results"), 1_234_567);
/// assert_eq!(parse_count("no matches"), 0);
/// ```
pub fn parse_count(text: &str) -> u64 {
    CountFormat::comma().parse(text)
}

/// Read the count node from result-page HTML and parse it.
///
/// An absent count node yields 0.
///
/// # Errors
///
/// Returns [`SearchError::Parse`] only if `selector` is invalid.
pub fn parse_count_html(
    html: &str,
    selector: &str,
    format: &CountFormat,
) -> Result<u64, SearchError> {
    let document = HtmlDocument::parse(html);
    let count = extract_count(&document.root(), selector, format)?;
    tracing::debug!(count, "result count parsed");
    Ok(count)
}

/// Read the first node matching `selector` under `root` and parse its text.
pub fn extract_count<N: DocumentNode>(
    root: &N,
    selector: &str,
    format: &CountFormat,
) -> Result<u64, SearchError> {
    Ok(root
        .select_first(selector)?
        .map(|node| format.parse(&node.text()))
        .unwrap_or(0))
}
