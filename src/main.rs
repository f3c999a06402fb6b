//! Tunetag CLI application entry point
//!
//! This is the main executable for tunetag. It loads a static site's song
//! catalog and lets you filter it by tag, render the catalog page, and build
//! shareable filter links.
//!
//! # Usage
//!
//! ```bash
//! # Toggle tags interactively (default command)
//! tunetag
//! tunetag browse --url "https://example.com/?tags=rock"
//!
//! # Render the page for a shared link
//! tunetag render --url "?tags=rock,live&mode=and" -o page.html --open
//!
//! # Songs tagged both rock and live
//! tunetag list -t rock -t live --and
//!
//! # Shareable link for a selection
//! tunetag url -t piano --base https://example.com/songs/
//!
//! # Work on a site directory without registering it
//! tunetag tags --root ./public
//! ```
//!
//! # Configuration
//!
//! On first run, tunetag will prompt for a site to register. Configuration is
//! stored in the user's config directory (`~/.config/tunetag/config.toml` on
//! Linux). Set `TUNETAG_LOG` (e.g. `TUNETAG_LOG=debug`) to control logging.

use tracing_subscriber::EnvFilter;
use tunetag::{
    TunetagError,
    cli::{Cli, Commands},
    commands::{self, SiteContext},
    config::TunetagConfig,
};

type Result<T> = std::result::Result<T, TunetagError>;

/// Environment variable holding the log filter
const LOG_ENV: &str = "TUNETAG_LOG";

/// Install the stderr log subscriber
///
/// `TUNETAG_LOG` takes precedence; otherwise only warnings are shown, or
/// debug output for this crate with `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "warn,tunetag=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let command = cli.get_command();

    // An explicit --root needs no registered site, so skip the setup wizard
    let config = match command.get_site_args() {
        Some(args) if args.root.is_some() => TunetagConfig::load()?,
        _ => TunetagConfig::load_or_setup()?,
    };
    let quiet = cli.quiet || config.quiet;

    match &command {
        Commands::Site { command } => {
            commands::site(config, &TunetagConfig::config_path()?, command, quiet)
        }
        Commands::Config { command } => {
            commands::config(config, &TunetagConfig::config_path()?, command, quiet)
        }
        Commands::Browse { output, filter_args, site_args } => {
            let ctx = SiteContext::resolve(&config, site_args)?;
            commands::browse(&ctx, filter_args, output.as_deref(), quiet)
        }
        Commands::Render { output, open, filter_args, site_args } => {
            let ctx = SiteContext::resolve(&config, site_args)?;
            commands::render(&ctx, filter_args, output.as_deref(), *open, quiet)
        }
        Commands::List { filter_args, site_args } => {
            let ctx = SiteContext::resolve(&config, site_args)?;
            commands::list(&ctx, filter_args, quiet)
        }
        Commands::Tags { site_args } => {
            let ctx = SiteContext::resolve(&config, site_args)?;
            commands::tags(&ctx, quiet)
        }
        Commands::Url { base, filter_args, site_args } => {
            let ctx = SiteContext::resolve(&config, site_args)?;
            commands::url(&ctx, filter_args, base.as_deref(), quiet)
        }
    }
}
