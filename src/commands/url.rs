//! Url command - print the shareable address for a filter

use super::{SiteContext, warn_unknown_tags};
use crate::{
    TunetagError,
    catalog::{CatalogSource, unique_tags},
    cli::FilterArgs,
    search::{Location, query},
};
use url::Url;

type Result<T> = std::result::Result<T, TunetagError>;

/// Execute the url command
///
/// `base` replaces the site's page address when given.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, or `--base` or `--url`
/// is invalid
pub fn execute(ctx: &SiteContext, args: &FilterArgs, base: Option<&str>, quiet: bool) -> Result<()> {
    let page = match base {
        Some(input) => query::parse_url(input)?,
        None => ctx.page.clone(),
    };
    let tags = unique_tags(&ctx.catalog.load()?);
    warn_unknown_tags(&args.state(&args.location(&page)?), &tags, quiet);

    println!("{}", shareable_url(&page, args, &tags)?);
    Ok(())
}

/// Address of `page` showing the filter described by `args`
///
/// Tags not in `known` are dropped, since the page would ignore them anyway.
///
/// # Errors
/// Returns an error if `--url` is invalid
pub fn shareable_url(page: &Url, args: &FilterArgs, known: &[String]) -> Result<Url> {
    let mut location = args.location(page)?;
    let requested = args.state(&location);
    location.replace_state(&requested.retain_known(known));
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TunetagConfig;
    use crate::testing::sample_site;

    fn known() -> Vec<String> {
        vec!["live".to_string(), "rock".to_string()]
    }

    fn page() -> Url {
        Url::parse("https://example.com/songs/").unwrap()
    }

    #[test]
    fn test_unknown_tags_are_dropped_from_link() {
        let args = FilterArgs {
            tags: vec!["rock".into(), "nonexistent".into()],
            ..FilterArgs::default()
        };
        let url = shareable_url(&page(), &args, &known()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/songs/?tags=rock");
    }

    #[test]
    fn test_flags_override_url_state() {
        let args = FilterArgs {
            url: Some("?tags=live".into()),
            tags: vec!["rock".into()],
            and: true,
        };
        let url = shareable_url(&page(), &args, &known()).unwrap();
        assert_eq!(url.query(), Some("tags=rock&mode=and"));
    }

    #[test]
    fn test_url_state_kept_without_flags() {
        let args = FilterArgs {
            url: Some("?tags=rock,live&mode=and".into()),
            ..FilterArgs::default()
        };
        let url = shareable_url(&page(), &args, &known()).unwrap();
        assert_eq!(url.query(), Some("tags=live%2Crock&mode=and"));
    }

    #[test]
    fn test_link_on_site_catalog() {
        let site = sample_site();
        let ctx = SiteContext::new(site.root().to_path_buf(), &TunetagConfig::default()).unwrap();
        let tags = unique_tags(&ctx.catalog.load().unwrap());

        let args = FilterArgs {
            tags: vec!["live".into(), "jazz".into()],
            ..FilterArgs::default()
        };
        let url = shareable_url(&ctx.page, &args, &tags).unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.path().ends_with("/index.html"));
        assert_eq!(url.query(), Some("tags=live"));
    }

    #[test]
    fn test_base_override() {
        let site = sample_site();
        let ctx = SiteContext::new(site.root().to_path_buf(), &TunetagConfig::default()).unwrap();
        let args = FilterArgs {
            tags: vec!["rock".into()],
            ..FilterArgs::default()
        };

        assert!(execute(&ctx, &args, Some("https://songs.example/list/"), true).is_ok());
        assert!(matches!(
            execute(&ctx, &args, Some("not a url"), true),
            Err(TunetagError::SearchError(_))
        ));
    }
}
