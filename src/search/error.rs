//! Search-specific error types
//!
//! Filtering and query decoding are total, so the only failure here is a page
//! address that cannot be parsed at all. Malformed parameters inside a valid
//! address are normalized rather than reported.

use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// The page address could not be parsed
    #[error("Invalid page URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
