//! Site command - manage registered site roots
//!
//! Every change is written back to `config_path` before reporting success.

use crate::{TunetagError, cli::SiteCommands, config::TunetagConfig};
use std::path::Path;

type Result<T> = std::result::Result<T, TunetagError>;

/// Execute a site management command
///
/// # Errors
/// Returns an error if the site does not exist (or already exists when
/// adding), the root is not a directory, or the configuration cannot be saved
pub fn execute(
    mut config: TunetagConfig,
    config_path: &Path,
    command: &SiteCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        SiteCommands::Add { name, root } => {
            if config.get_site(name).is_some() {
                return Err(TunetagError::InvalidInput(format!("Site '{name}' already exists")));
            }
            if !root.is_dir() {
                return Err(TunetagError::InvalidInput(format!(
                    "Site root {} is not a directory",
                    root.display()
                )));
            }

            let resolved = std::fs::canonicalize(root)?;
            config.add_site(name.clone(), resolved.clone());
            let first = config.get_default_site().is_none();
            if first {
                config.set_default_site(name.clone())?;
            }
            config.save_to(config_path)?;

            if !quiet {
                println!("Site '{name}' added at {}", resolved.display());
                if first {
                    println!("Set '{name}' as default site");
                }
            }
        }
        SiteCommands::List => {
            if config.sites.is_empty() {
                if !quiet {
                    println!("No sites configured.");
                    println!("Add one with: tunetag site add <name> <root>");
                }
                return Ok(());
            }

            let default_site = config.get_default_site();
            for name in config.list_sites() {
                if quiet {
                    println!("{name}");
                } else if let Some(root) = config.get_site(name) {
                    let marker = if default_site == Some(name) { " (default)" } else { "" };
                    println!("  {name} -> {}{marker}", root.display());
                }
            }
        }
        SiteCommands::Remove { name } => {
            let was_default = config.get_default_site() == Some(name);
            if config.remove_site(name).is_none() {
                return Err(TunetagError::InvalidInput(format!("Site '{name}' does not exist")));
            }
            config.save_to(config_path)?;

            if !quiet {
                println!("Site '{name}' removed from configuration");
                if was_default {
                    println!("No default site left. Set one with: tunetag site set-default <name>");
                }
            }
        }
        SiteCommands::SetDefault { name } => {
            if config.get_site(name).is_none() {
                return Err(TunetagError::InvalidInput(format!("Site '{name}' does not exist")));
            }
            config.set_default_site(name.clone())?;
            config.save_to(config_path)?;

            if !quiet {
                println!("Set '{name}' as default site");
            }
        }
    }
    Ok(())
}
