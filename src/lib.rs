//! Tunetag - tag-filtered song catalog pages
//!
//! This library loads the song catalog of a static site, filters it by tags
//! with AND/OR logic, mirrors the filter into shareable page URLs, and
//! renders the result as HTML song cards.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod render;
pub mod search;
pub mod session;

#[cfg(test)]
pub mod testing;

pub use catalog::Song;
pub use session::Session;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum TunetagError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Search error
    #[error("Search error: {0}")]
    SearchError(#[from] search::SearchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
