//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against a site's catalog. [`SiteContext`] resolves
//! which site a command works on.

pub mod browse;
pub mod config;
pub mod list;
pub mod render;
pub mod site;
pub mod tags;
pub mod url;

// Re-export execute functions for convenience
pub use self::browse::execute as browse;
pub use self::config::execute as config;
pub use self::list::execute as list;
pub use self::render::execute as render;
pub use self::site::execute as site;
pub use self::tags::execute as tags;
pub use self::url::execute as url;

use crate::{
    TunetagError,
    catalog::SiteCatalog,
    cli::{FilterArgs, SiteArgs},
    config::TunetagConfig,
    render::Renderer,
    search::{FilterState, Location},
    session::Session,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, TunetagError>;

/// Page file a site serves the catalog from
pub const INDEX_PAGE: &str = "index.html";

/// Everything a catalog command needs to know about its site
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub root: PathBuf,
    pub catalog: SiteCatalog,
    /// Address of the catalog page, without any filter query
    pub page: ::url::Url,
    pub title: String,
}

impl SiteContext {
    /// Resolve the site from `--root`, `--site`, or the configured default
    ///
    /// # Errors
    ///
    /// Returns `TunetagError::InvalidInput` if no site can be determined, the
    /// named site is not registered, or the page address cannot be built.
    pub fn resolve(config: &TunetagConfig, args: &SiteArgs) -> Result<Self> {
        let root = if let Some(root) = &args.root {
            root.clone()
        } else {
            let name = args
                .site
                .clone()
                .or_else(|| config.get_default_site().cloned())
                .ok_or_else(|| TunetagError::InvalidInput(
                    "No default site set. Use 'tunetag site add <name> <root>' to register one, or pass --root <path>.".into()
                ))?;
            config
                .get_site(&name)
                .cloned()
                .ok_or_else(|| TunetagError::InvalidInput(format!("Site '{name}' not found in configuration")))?
        };

        Self::new(root, config)
    }

    /// Build a context for `root` using the settings in `config`
    ///
    /// # Errors
    ///
    /// Returns `TunetagError` if the root cannot be canonicalized or the
    /// configured base URL is invalid.
    pub fn new(root: PathBuf, config: &TunetagConfig) -> Result<Self> {
        let page = match &config.base_url {
            Some(base) => crate::search::query::parse_url(base)?,
            None => {
                let index = std::fs::canonicalize(&root)?.join(INDEX_PAGE);
                ::url::Url::from_file_path(&index).map_err(|()| {
                    TunetagError::InvalidInput(format!("Cannot build a page URL for {}", index.display()))
                })?
            }
        };

        Ok(Self {
            catalog: SiteCatalog::new(&root).with_manifest(&config.manifest),
            root,
            page,
            title: config.title.clone(),
        })
    }
}

/// Start a session on the view described by `args`
///
/// Also returns the state that was asked for, before tags unknown to the
/// catalog were dropped.
fn filtered_session<R: Renderer>(
    ctx: &SiteContext,
    args: &FilterArgs,
    renderer: R,
) -> Result<(Session<::url::Url, R>, FilterState)> {
    let mut location = args.location(&ctx.page)?;
    let requested = args.state(&location);
    location.replace_state(&requested);

    let session = Session::start(&ctx.catalog, location, renderer)?;
    Ok((session, requested))
}

/// Warn about selected tags that the catalog does not have
fn warn_unknown_tags(requested: &FilterState, known: &[String], quiet: bool) {
    if quiet {
        return;
    }
    for tag in &requested.selected_tags {
        if known.binary_search(tag).is_err() {
            eprintln!("Warning: tag '{tag}' does not exist in the catalog and is ignored");
        }
    }
}
