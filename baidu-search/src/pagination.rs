//! Total page count from a result count.

use crate::error::SearchError;

/// `ceil(result_count / page_size)`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] if `page_size` is zero.
/// Configuration validation rejects a zero page size earlier, so this
/// only fires for direct callers.
pub fn page_count(result_count: u64, page_size: u32) -> Result<u64, SearchError> {
    if page_size == 0 {
        return Err(SearchError::InvalidArgument(
            "page_size must be greater than 0".into(),
        ));
    }
    Ok(result_count.div_ceil(u64::from(page_size)))
}
