//! Tag index derived from a loaded catalog

use super::Song;
use std::collections::{BTreeMap, BTreeSet};

/// Collect every distinct tag across `songs`, sorted ascending
///
/// Songs without tags contribute nothing. The result does not depend on the
/// order of `songs` or on duplicate tags within or across songs.
#[must_use]
pub fn unique_tags(songs: &[Song]) -> Vec<String> {
    songs
        .iter()
        .flat_map(|s| s.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Count how many songs carry each tag
///
/// A tag repeated on a single song counts that song once.
#[must_use]
pub fn tag_counts(songs: &[Song]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for song in songs {
        let distinct: BTreeSet<&String> = song.tags.iter().collect();
        for tag in distinct {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::song;

    #[test]
    fn test_unique_tags_empty_catalog() {
        assert!(unique_tags(&[]).is_empty());
    }

    #[test]
    fn test_unique_tags_sorted_and_deduplicated() {
        let songs = vec![
            song("1", &["rock", "live"]),
            song("2", &["ambient", "rock", "rock"]),
            song("3", &[]),
            song("4", &["live"]),
        ];

        assert_eq!(unique_tags(&songs), vec!["ambient", "live", "rock"]);
    }

    #[test]
    fn test_unique_tags_independent_of_order() {
        let mut songs = vec![
            song("1", &["b", "a"]),
            song("2", &["c"]),
            song("3", &["a", "d"]),
        ];
        let forward = unique_tags(&songs);
        songs.reverse();
        assert_eq!(forward, unique_tags(&songs));
    }

    #[test]
    fn test_unique_tags_is_union_of_song_tags() {
        let songs = vec![song("1", &["x", "y"]), song("2", &["y", "z"])];
        let tags = unique_tags(&songs);

        for s in &songs {
            for t in &s.tags {
                assert!(tags.contains(t));
            }
        }
        for t in &tags {
            assert!(songs.iter().any(|s| s.has_tag(t)));
        }
    }

    #[test]
    fn test_unique_tags_byte_order() {
        let songs = vec![song("1", &["b", "B", "a"])];
        assert_eq!(unique_tags(&songs), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_tag_counts() {
        let songs = vec![
            song("1", &["rock", "live", "rock"]),
            song("2", &["rock"]),
            song("3", &[]),
        ];
        let counts = tag_counts(&songs);

        assert_eq!(counts.get("rock"), Some(&2));
        assert_eq!(counts.get("live"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
