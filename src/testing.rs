//! Testing utilities for tunetag
//!
//! This module provides fixture builders for songs and tag sets, plus a
//! `TempSite` wrapper that lays out a static site directory on disk.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{DEFAULT_MANIFEST, Song};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a song whose id is `id` and whose tags are `tags`
///
/// Title and audio reference are derived from the id.
pub fn song(id: &str, tags: &[&str]) -> Song {
    Song::new(
        id,
        format!("Song {id}"),
        format!("audio/{id}.mp3"),
        None,
        tags.iter().map(|t| (*t).to_string()).collect(),
    )
}

/// Build a tag selection from string literals
pub fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}

/// Temporary static site that is removed on drop
///
/// Records live under the directory of the default manifest.
///
/// # Examples
/// ```ignore
/// let site = TempSite::new();
/// site.add_record("a.json", r#"{"id": 1, "title": "A", "audio_url": "a.mp3"}"#);
/// site.write_manifest(&["a.json"]);
/// let songs = SiteCatalog::new(site.root()).load()?;
/// ```
pub struct TempSite {
    dir: TempDir,
}

impl TempSite {
    /// Create an empty site directory
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp site"),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent directories
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create site directory");
        }
        fs::write(&path, content).expect("Failed to write site file");
    }

    /// Write a record file next to the manifest
    pub fn add_record(&self, name: &str, json: &str) {
        self.write_file(&record_path(name), json);
    }

    /// Write the manifest listing the given record names in order
    ///
    /// # Panics
    /// Panics if the manifest cannot be serialized or written.
    pub fn write_manifest(&self, names: &[&str]) {
        let entries: Vec<String> = names.iter().map(|n| record_path(n)).collect();
        let json = serde_json::to_string(&entries).expect("Failed to serialize manifest");
        self.write_file(DEFAULT_MANIFEST, &json);
    }
}

/// Site with three songs: Alpha `[rock, live]`, Beta `[rock]`, Gamma untagged
pub fn sample_site() -> TempSite {
    let site = TempSite::new();
    site.add_record("a.json", r#"{"id": 1, "title": "Alpha", "audio_url": "a.mp3", "tags": ["rock", "live"]}"#);
    site.add_record("b.json", r#"{"id": 2, "title": "Beta", "audio_url": "b.mp3", "tags": ["rock"]}"#);
    site.add_record("c.json", r#"{"id": 3, "title": "Gamma", "audio_url": "c.mp3"}"#);
    site.write_manifest(&["a.json", "b.json", "c.json"]);
    site
}

fn record_path(name: &str) -> String {
    let dir = Path::new(DEFAULT_MANIFEST)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{dir}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_fixture() {
        let s = song("9", &["x", "y"]);
        assert_eq!(s.id, "9");
        assert_eq!(s.audio_url, "audio/9.mp3");
        assert_eq!(s.tags, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_temp_site_layout() {
        let site = TempSite::new();
        site.add_record("a.json", "{}");
        site.write_manifest(&["a.json"]);

        assert!(site.root().join("music-metadata/a.json").exists());
        let manifest = fs::read_to_string(site.root().join(DEFAULT_MANIFEST)).unwrap();
        assert_eq!(manifest, r#"["music-metadata/a.json"]"#);
    }

    #[test]
    fn test_temp_site_cleanup() {
        let root = {
            let site = TempSite::new();
            site.root().to_path_buf()
        };
        assert!(!root.exists());
    }
}
