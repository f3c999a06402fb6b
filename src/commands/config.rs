//! Config command - read and write configuration values

use crate::{TunetagError, cli::ConfigCommands, config::TunetagConfig};
use std::path::Path;

type Result<T> = std::result::Result<T, TunetagError>;

/// Execute a configuration command
///
/// # Errors
/// Returns an error if the setting is malformed, the key is unknown, or the
/// configuration cannot be saved
pub fn execute(
    mut config: TunetagConfig,
    config_path: &Path,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting)?;
            config.set_value(key, value)?;
            config.save_to(config_path)?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
    }
    Ok(())
}

/// Split a `key=value` argument
fn parse_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| TunetagError::InvalidInput(
            "Invalid format. Use: tunetag config set key=value".into()
        ))
}
