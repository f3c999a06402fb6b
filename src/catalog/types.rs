//! Song record types
//!
//! Records arrive from the static site as loosely-shaped JSON: the `id` may be a
//! string or a number, and `release_date` and `tags` may be missing or `null`.
//! This module separates the wire shape from the shape the rest of the crate
//! works with.
//!
//! # Types
//!
//! - **`RawSong`**: A record exactly as deserialized from JSON
//! - **`SongId`**: The `id` field, string or number
//! - **`Song`**: A normalized record where every optional field has its default
//!
//! # Examples
//!
//! ```
//! use tunetag::catalog::{RawSong, Song, PLACEHOLDER};
//!
//! let raw: RawSong = serde_json::from_str(
//!     r#"{"id": 7, "title": "Lullaby", "audio_url": "audio/lullaby.mp3"}"#,
//! ).unwrap();
//! let song = Song::from(raw);
//!
//! assert_eq!(song.id, "7");
//! assert_eq!(song.release_date, PLACEHOLDER);
//! assert!(song.tags.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display placeholder for absent optional values
pub const PLACEHOLDER: &str = "—";

/// Identifier as it appears in a record file
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum SongId {
    Text(String),
    Number(serde_json::Number),
}

/// Integral floats below this print in plain digits, as in a browser
const PLAIN_FLOAT_LIMIT: f64 = 1e21;

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => match n.as_f64() {
                // `1.0` shows as `1`
                Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < PLAIN_FLOAT_LIMIT => {
                    write!(f, "{:.0}", v + 0.0)
                }
                _ => write!(f, "{n}"),
            },
        }
    }
}

/// A song record as stored in the site's metadata directory
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct RawSong {
    pub id: SongId,
    pub title: String,
    pub audio_url: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// A normalized song record
///
/// Immutable once loaded. `release_date` holds [`PLACEHOLDER`] when the record
/// had none, and `tags` is empty when the record had none.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub audio_url: String,
    pub release_date: String,
    pub tags: Vec<String>,
}

impl Song {
    /// Create a new song from already-normalized values
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        audio_url: impl Into<String>,
        release_date: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            audio_url: audio_url.into(),
            release_date: release_date.unwrap_or_else(|| PLACEHOLDER.to_string()),
            tags,
        }
    }

    /// Check whether the song carries the given tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the record had a release date
    #[must_use]
    pub fn has_release_date(&self) -> bool {
        self.release_date != PLACEHOLDER
    }
}

impl From<RawSong> for Song {
    fn from(raw: RawSong) -> Self {
        Self::new(
            raw.id.to_string(),
            raw.title,
            raw.audio_url,
            raw.release_date,
            raw.tags.unwrap_or_default(),
        )
    }
}
