//! Catalog-specific error types
//!
//! This module defines the errors that can occur while loading a song catalog
//! from a static site. A failed load is never partially recovered: any error
//! reading the manifest or a single record aborts the whole load.
//!
//! # Error Types
//!
//! - **`Io`**: The manifest or a record file could not be read
//! - **`Parse`**: The manifest or a record is not valid JSON of the expected shape
//! - **`InvalidPath`**: A manifest entry points outside the site root

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A manifest or record file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest or record file contained malformed JSON
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A manifest entry is not a valid site-relative path
    #[error("Invalid record path in manifest: {0}")]
    InvalidPath(String),
}

impl CatalogError {
    /// The file the error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::InvalidPath(_) => None,
        }
    }
}
