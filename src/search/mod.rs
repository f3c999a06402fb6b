//! Tag filtering and URL state
//!
//! Provides the pure pieces of the filter loop:
//! 1. Combine selected tags with AND/OR logic to pick visible songs
//! 2. Hold the selection as a value that changes only through events
//! 3. Mirror the selection into the page's query string and back

pub mod error;
pub mod filter;
pub mod query;
pub mod state;

pub use error::SearchError;
pub use filter::{SongFilterExt, TagMode, apply_filter};
pub use query::Location;
pub use state::{FilterEvent, FilterState};
