//! Tags command - list every tag in the catalog

use super::SiteContext;
use crate::{
    TunetagError,
    catalog::{CatalogSource, tag_counts},
    output,
};

type Result<T> = std::result::Result<T, TunetagError>;

/// Execute the tags listing command
///
/// # Errors
/// Returns an error if the catalog cannot be loaded
pub fn execute(ctx: &SiteContext, quiet: bool) -> Result<()> {
    let songs = ctx.catalog.load()?;
    let counts = tag_counts(&songs);

    if counts.is_empty() {
        if !quiet {
            println!("No tags found in catalog.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags in catalog:");
    }
    for (tag, count) in &counts {
        println!("{}", output::tag_with_count(tag, *count, quiet));
    }
    Ok(())
}
