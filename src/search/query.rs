//! Filter state in the page URL
//!
//! The selection is mirrored into two query parameters so a filtered view can
//! be bookmarked or shared:
//!
//! - `tags`: selected tags joined by commas, present only when at least one
//!   tag is selected
//! - `mode`: the literal `and`, present only in AND mode (OR is implied)
//!
//! Decoding is permissive. Empty comma segments are dropped, and any `mode`
//! value other than exactly `and` means OR. Tag values are not escaped, so a
//! tag containing a comma does not survive a round trip.
//!
//! ```
//! use tunetag::search::{FilterState, TagMode, query};
//!
//! let state = FilterState::new(["live".to_string(), "rock".to_string()], TagMode::And);
//! let encoded = query::encode(&state);
//!
//! assert_eq!(encoded, "tags=live%2Crock&mode=and");
//! assert_eq!(query::decode_query(&encoded), state);
//! ```

use super::error::SearchError;
use super::filter::TagMode;
use super::state::FilterState;
use url::{Url, form_urlencoded};

pub const TAGS_PARAM: &str = "tags";
pub const MODE_PARAM: &str = "mode";
pub const AND_VALUE: &str = "and";

const TAG_SEPARATOR: char = ',';

/// Serialize a filter state into a query string (without the leading `?`)
#[must_use]
pub fn encode(state: &FilterState) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if !state.selected_tags.is_empty() {
        let joined = state
            .selected_tags
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");
        params.append_pair(TAGS_PARAM, &joined);
    }
    if state.mode == TagMode::And {
        params.append_pair(MODE_PARAM, AND_VALUE);
    }
    params.finish()
}

/// Read the filter state from a page URL
#[must_use]
pub fn decode(url: &Url) -> FilterState {
    decode_query(url.query().unwrap_or_default())
}

/// Read the filter state from a bare query string
///
/// A leading `?` is ignored. When a parameter repeats, its first value wins.
#[must_use]
pub fn decode_query(query: &str) -> FilterState {
    let pairs: Vec<(String, String)> =
        form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
    let first = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    let selected_tags = first(TAGS_PARAM)
        .unwrap_or_default()
        .split(TAG_SEPARATOR)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    let mode = if first(MODE_PARAM) == Some(AND_VALUE) {
        TagMode::And
    } else {
        TagMode::Or
    };

    FilterState { selected_tags, mode }
}

/// Resolve user input against the page's base address
///
/// `input` may be an absolute URL or anything relative to `base`, such as a
/// `?tags=...` query. A query typed without its `?` (`tags=rock&mode=and`)
/// is treated as a query rather than a relative path.
///
/// # Errors
///
/// Returns `SearchError::InvalidUrl` if `input` cannot be parsed.
pub fn resolve(base: &Url, input: &str) -> Result<Url, SearchError> {
    let joined = if is_bare_query(input) {
        base.join(&format!("?{input}"))
    } else {
        base.join(input)
    };
    joined.map_err(|source| SearchError::InvalidUrl {
        input: input.to_string(),
        source,
    })
}

/// A relative reference whose first `=` comes before any path, query or
/// fragment delimiter
fn is_bare_query(input: &str) -> bool {
    if Url::parse(input).is_ok() {
        return false;
    }
    match input.find(['=', '/', '?', '#']) {
        Some(i) => i > 0 && input[i..].starts_with('='),
        None => false,
    }
}

/// Parse an absolute page address
///
/// # Errors
///
/// Returns `SearchError::InvalidUrl` if `input` is not an absolute URL.
pub fn parse_url(input: &str) -> Result<Url, SearchError> {
    Url::parse(input).map_err(|source| SearchError::InvalidUrl {
        input: input.to_string(),
        source,
    })
}

/// The address bar of the page showing the catalog
///
/// Writing goes through [`Location::replace_query`], which swaps the query in
/// place. It never records a new history entry, so stepping back does not walk
/// through earlier filter states.
pub trait Location {
    /// The current address
    fn url(&self) -> &Url;

    /// Replace the query string of the current address
    fn replace_query(&mut self, query: &str);

    /// Encode `state` into the current address
    fn replace_state(&mut self, state: &FilterState) {
        self.replace_query(&encode(state));
    }

    /// Decode the filter state from the current address
    fn current_state(&self) -> FilterState {
        decode(self.url())
    }
}

impl Location for Url {
    fn url(&self) -> &Url {
        self
    }

    fn replace_query(&mut self, query: &str) {
        self.set_query(Some(query));
    }
}
