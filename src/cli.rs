//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for tunetag using the `clap`
//! crate. It provides command parsing, argument validation, and helper methods
//! for turning arguments into filter state.
//!
//! # Commands
//!
//! - **browse**: Interactive tag/mode toggling with live results (default)
//! - **render**: Write the catalog page for a filter state as HTML
//! - **list**: Print the songs matching a filter
//! - **tags**: Print every tag with its usage count
//! - **url**: Print the shareable page URL for a filter
//! - **site**: Manage named site roots (add, remove, list, set-default)
//! - **config**: Get and set configuration values
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use tunetag::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["tunetag", "list", "-t", "rock", "--and"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::search::{FilterState, TagMode, query};
use crate::search::SearchError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., manifest)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Site management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SiteCommands {
    /// Register a site root
    Add {
        /// Name of the site
        name: String,

        /// Directory containing the site (and its metadata manifest)
        root: PathBuf,
    },

    /// List all registered sites
    List,

    /// Forget a site (files are left untouched)
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the site to remove
        name: String,
    },

    /// Set the default site
    #[command(name = "set-default")]
    SetDefault {
        /// Name of the site to set as default
        name: String,
    },
}

/// Shared arguments for commands that read a site's catalog
#[derive(Parser, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Registered site to use (overrides default)
    #[arg(long = "site", value_name = "NAME", conflicts_with = "root")]
    pub site: Option<String>,

    /// Site root directory (bypasses registered sites)
    #[arg(long = "root", value_name = "PATH")]
    pub root: Option<PathBuf>,
}

/// Shared arguments describing a filter state
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Page URL or query (e.g. "?tags=rock,live&mode=and", the "?" may be left off) to restore state from
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Tags to select (can specify multiple: -t tag1 -t tag2); replaces tags from --url
    #[arg(short = 't', long = "tag", value_name = "TAG", num_args = 0..)]
    pub tags: Vec<String>,

    /// Require ALL selected tags (AND logic, default is ANY)
    #[arg(long = "and")]
    pub and: bool,
}

impl FilterArgs {
    /// Address the command operates on
    ///
    /// `--url` is resolved against `base`, so it may be absolute or a bare query.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if `--url` cannot be parsed.
    pub fn location(&self, base: &Url) -> Result<Url, SearchError> {
        match &self.url {
            Some(input) => query::resolve(base, input),
            None => Ok(base.clone()),
        }
    }

    /// Filter state described by the arguments
    ///
    /// Starts from the state decoded from `location`, then applies `-t` and
    /// `--and` on top.
    #[must_use]
    pub fn state(&self, location: &Url) -> FilterState {
        let mut state = query::decode(location);
        if !self.tags.is_empty() {
            state.selected_tags = self.tags.iter().cloned().collect();
        }
        if self.and {
            state.mode = TagMode::And;
        }
        state
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "tunetag")]
#[command(about = "Browse a static site's song catalog by tag", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Toggle tags and mode interactively (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Write the final page to this file on exit
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        filter_args: FilterArgs,

        #[command(flatten)]
        site_args: SiteArgs,
    },

    /// Render the catalog page as HTML
    #[command(visible_alias = "r")]
    Render {
        /// Write to this file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Open the written file in the default browser
        #[arg(long = "open", requires = "output")]
        open: bool,

        #[command(flatten)]
        filter_args: FilterArgs,

        #[command(flatten)]
        site_args: SiteArgs,
    },

    /// List songs matching a filter
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        filter_args: FilterArgs,

        #[command(flatten)]
        site_args: SiteArgs,
    },

    /// List all tags with usage counts
    Tags {
        #[command(flatten)]
        site_args: SiteArgs,
    },

    /// Print the shareable page URL for a filter
    Url {
        /// Page address to build the link on (overrides the configured base_url)
        #[arg(long = "base", value_name = "URL")]
        base: Option<String>,

        #[command(flatten)]
        filter_args: FilterArgs,

        #[command(flatten)]
        site_args: SiteArgs,
    },

    /// Manage registered sites
    Site {
        #[command(subcommand)]
        command: SiteCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// Site selection arguments, for commands that read a catalog
    #[must_use]
    pub const fn get_site_args(&self) -> Option<&SiteArgs> {
        match self {
            Self::Browse { site_args, .. }
            | Self::Render { site_args, .. }
            | Self::List { site_args, .. }
            | Self::Tags { site_args }
            | Self::Url { site_args, .. } => Some(site_args),
            Self::Site { .. } | Self::Config { .. } => None,
        }
    }

    /// Filter arguments, for commands that take them
    #[must_use]
    pub const fn get_filter_args(&self) -> Option<&FilterArgs> {
        match self {
            Self::Browse { filter_args, .. }
            | Self::Render { filter_args, .. }
            | Self::List { filter_args, .. }
            | Self::Url { filter_args, .. } => Some(filter_args),
            Self::Tags { .. } | Self::Site { .. } | Self::Config { .. } => None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            output: None,
            filter_args: FilterArgs::default(),
            site_args: SiteArgs::default(),
        })
    }
}
