//! Render command - write the catalog page for a filter state

use super::{SiteContext, filtered_session};
use crate::{
    TunetagError,
    cli::FilterArgs,
    render::{self, HtmlRenderer, Renderer},
    session::Session,
};
use std::fs;
use std::path::Path;
use tracing::info;
use url::Url;

type Result<T> = std::result::Result<T, TunetagError>;

/// Execute the render command
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, `--url` is invalid, or
/// the output file cannot be written or opened
pub fn execute(
    ctx: &SiteContext,
    args: &FilterArgs,
    output: Option<&Path>,
    open: bool,
    quiet: bool,
) -> Result<()> {
    let (session, _) = filtered_session(ctx, args, HtmlRenderer::new())?;
    let page = page_for(ctx, &session);

    match output {
        Some(path) => {
            fs::write(path, page)?;
            info!(path = %path.display(), "wrote page");
            if !quiet {
                println!("Wrote {} ({} of {} songs)", path.display(), session.visible().len(), session.songs().len());
            }
            if open {
                open::that(path)?;
            }
        }
        None => print!("{page}"),
    }
    Ok(())
}

/// Full HTML document for the session's current view
#[must_use]
pub fn page_for<R: Renderer>(ctx: &SiteContext, session: &Session<Url, R>) -> String {
    render::render_page(
        &ctx.title,
        session.tags(),
        session.state(),
        &session.visible(),
        session.songs().len(),
    )
}
