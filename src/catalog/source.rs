//! Catalog sources
//!
//! A static site publishes its songs as a manifest, a JSON array of record
//! paths, plus one JSON file per song. [`SiteCatalog`] reads that layout from a
//! local site directory. Record files are read in parallel and returned in
//! manifest order; any failure aborts the load.

use super::{CatalogError, RawSong, Song};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Default manifest location relative to the site root
pub const DEFAULT_MANIFEST: &str = "music-metadata/index.json";

/// Something that can produce the full song catalog
pub trait CatalogSource {
    /// Load every song, normalized
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read or parsed.
    fn load(&self) -> Result<Vec<Song>, CatalogError>;
}

/// Already-loaded songs, handy for embedding and tests
impl CatalogSource for Vec<Song> {
    fn load(&self) -> Result<Vec<Song>, CatalogError> {
        Ok(self.clone())
    }
}

/// Catalog stored in a static site directory
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    root: PathBuf,
    manifest: PathBuf,
}

impl SiteCatalog {
    /// Catalog at `root` using the default manifest location
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }

    /// Override the manifest location (relative to the site root)
    #[must_use]
    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }

    /// Read the manifest and resolve each entry against the site root
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the manifest is unreadable, malformed, or
    /// lists a path that leaves the site root.
    pub fn record_paths(&self) -> Result<Vec<PathBuf>, CatalogError> {
        let entries: Vec<String> = read_json(&self.manifest_path())?;
        entries
            .iter()
            .map(|entry| resolve(&self.root, entry))
            .collect()
    }
}

impl CatalogSource for SiteCatalog {
    fn load(&self) -> Result<Vec<Song>, CatalogError> {
        let paths = self.record_paths()?;
        debug!(count = paths.len(), manifest = %self.manifest_path().display(), "read manifest");

        let songs = paths
            .par_iter()
            .map(|path| read_json::<RawSong>(path).map(Song::from))
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = songs.len(), root = %self.root.display(), "loaded catalog");
        Ok(songs)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve a manifest entry to a file under `root`
///
/// A leading `/` refers to the site root, like an absolute URL path would.
fn resolve(root: &Path, entry: &str) -> Result<PathBuf, CatalogError> {
    let relative = Path::new(entry.trim_start_matches('/'));
    if entry.trim().is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(CatalogError::InvalidPath(entry.to_string()));
    }
    Ok(root.join(relative))
}
