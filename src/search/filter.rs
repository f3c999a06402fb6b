//! Tag filtering for song lists
//!
//! Selected tags are combined with either AND or OR logic. An empty selection
//! means "no filter" and passes every song through. Matching songs keep their
//! original relative order.
//!
//! # Iterator Adapters
//!
//! [`SongFilterExt`] adds the same filtering to any iterator of song
//! references, so it can be chained with other adapters:
//!
//! ```
//! use std::collections::BTreeSet;
//! use tunetag::catalog::Song;
//! use tunetag::search::{SongFilterExt, TagMode};
//!
//! let songs = vec![
//!     Song::new("1", "One", "1.mp3", None, vec!["rock".into()]),
//!     Song::new("2", "Two", "2.mp3", None, vec!["jazz".into()]),
//! ];
//! let selected: BTreeSet<String> = ["rock".to_string()].into();
//!
//! let visible = songs.iter().filter_tags(&selected, TagMode::Or);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "1");
//! ```

use crate::catalog::Song;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// How multiple selected tags are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// Match songs with ANY selected tag
    #[default]
    Or,
    /// Match songs with ALL selected tags
    And,
}

impl TagMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Or => Self::And,
            Self::And => Self::Or,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
        }
    }
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a single song against the selection
#[must_use]
pub fn matches(song: &Song, selected: &BTreeSet<String>, mode: TagMode) -> bool {
    if selected.is_empty() {
        return true;
    }
    match mode {
        TagMode::And => selected.iter().all(|t| song.has_tag(t)),
        TagMode::Or => selected.iter().any(|t| song.has_tag(t)),
    }
}

/// Compute the visible subset of `songs`
///
/// # Arguments
/// * `songs` - Full catalog, in display order
/// * `selected` - Tags the user has checked
/// * `mode` - `And` requires every selected tag, `Or` requires at least one
///
/// # Returns
/// References to matching songs in their original order. With an empty
/// selection every song is returned.
#[must_use]
pub fn apply_filter<'a>(songs: &'a [Song], selected: &BTreeSet<String>, mode: TagMode) -> Vec<&'a Song> {
    songs.iter().filter_tags(selected, mode)
}

/// Extension trait for filtering iterators of song references by tag
pub trait SongFilterExt<'a>: Iterator<Item = &'a Song> + Sized {
    /// Keep songs matching the selection under `mode`
    fn filter_tags(self, selected: &BTreeSet<String>, mode: TagMode) -> Vec<&'a Song> {
        self.filter(|song| matches(song, selected, mode)).collect()
    }
}

impl<'a, I> SongFilterExt<'a> for I where I: Iterator<Item = &'a Song> {}
