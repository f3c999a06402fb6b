//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when tunetag is run for the first time.

use super::TunetagConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for a site name and root directory
///
/// Guides the user through registering their first site:
/// 1. Prompts for a site name (default: "default")
/// 2. Prompts for the site root (default: current directory)
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The current directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<TunetagConfig, ConfigError> {
    println!("Welcome to tunetag! Let's register your first site.\n");

    let cwd = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Could not determine current directory: {e}")))?;

    let site_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Site name")
        .default("default".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let root_str: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Site root (directory containing the metadata manifest)")
        .default(cwd.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = initial_config(site_name, PathBuf::from(root_str));
    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

/// Configuration with `root` registered as `name` and made the default
#[must_use]
pub fn initial_config(name: String, root: PathBuf) -> TunetagConfig {
    let mut config = TunetagConfig::default();
    config.add_site(name.clone(), root);
    config.default_site = Some(name);
    config
}
