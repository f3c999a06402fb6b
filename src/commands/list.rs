//! List command - print the songs matching a filter

use super::{SiteContext, filtered_session, warn_unknown_tags};
use crate::{TunetagError, cli::FilterArgs, output::TerminalRenderer};

type Result<T> = std::result::Result<T, TunetagError>;

/// Execute the list command
///
/// The filter is restored exactly as the page would restore it, so tags the
/// catalog does not have are ignored.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded or `--url` is invalid
pub fn execute(ctx: &SiteContext, args: &FilterArgs, quiet: bool) -> Result<()> {
    let (session, requested) = filtered_session(ctx, args, TerminalRenderer::new(quiet))?;
    warn_unknown_tags(&requested, session.tags(), quiet);

    if !quiet {
        println!("\nFilter: {}", crate::output::state_summary(session.state()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TunetagConfig;
    use crate::render::HtmlRenderer;
    use crate::search::TagMode;
    use crate::testing::{sample_site, tag_set};

    fn titles(ctx: &SiteContext, args: &FilterArgs) -> Vec<String> {
        let (session, _) = filtered_session(ctx, args, HtmlRenderer::new()).unwrap();
        session.visible().iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_flags_override_url() {
        let site = sample_site();
        let ctx = SiteContext::new(site.root().to_path_buf(), &TunetagConfig::default()).unwrap();

        let from_url = FilterArgs {
            url: Some("?tags=live".into()),
            ..FilterArgs::default()
        };
        assert_eq!(titles(&ctx, &from_url), vec!["Alpha"]);

        let overridden = FilterArgs {
            url: Some("?tags=live".into()),
            tags: vec!["rock".into()],
            and: false,
        };
        assert_eq!(titles(&ctx, &overridden), vec!["Alpha", "Beta"]);

        let all = FilterArgs {
            url: Some("?tags=live".into()),
            tags: vec!["rock".into(), "live".into()],
            and: true,
        };
        assert_eq!(titles(&ctx, &all), vec!["Alpha"]);
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let site = sample_site();
        let ctx = SiteContext::new(site.root().to_path_buf(), &TunetagConfig::default()).unwrap();
        let args = FilterArgs {
            tags: vec!["jazz".into()],
            ..FilterArgs::default()
        };

        let (session, requested) = filtered_session(&ctx, &args, HtmlRenderer::new()).unwrap();
        assert_eq!(requested.selected_tags, tag_set(&["jazz"]));
        assert!(session.state().is_empty());
        assert_eq!(session.state().mode, TagMode::Or);
        assert_eq!(session.visible().len(), 3);
    }

    #[test]
    fn test_list_runs_on_site() {
        let site = sample_site();
        let ctx = SiteContext::new(site.root().to_path_buf(), &TunetagConfig::default()).unwrap();
        assert!(execute(&ctx, &FilterArgs::default(), true).is_ok());
    }
}
