//! Song catalog: record types, loading, and the tag index
//!
//! The catalog is loaded once per session and never mutated afterwards.
//! Everything downstream works on normalized [`Song`] values.

pub mod error;
pub mod index;
pub mod source;
pub mod types;

pub use error::CatalogError;
pub use index::{tag_counts, unique_tags};
pub use source::{CatalogSource, DEFAULT_MANIFEST, SiteCatalog};
pub use types::{PLACEHOLDER, RawSong, Song, SongId};
