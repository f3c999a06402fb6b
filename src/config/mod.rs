//! Configuration module for tunetag
//!
//! Manages application configuration including named site roots and display
//! preferences. Configuration is stored in the user's config directory.
//! Filter selections are never stored here; they live only in page URLs.

mod setup;

pub use setup::{first_time_setup, initial_config};

use crate::catalog::DEFAULT_MANIFEST;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Keys accepted by `config set` / `config get`
pub const KEYS: &[&str] = &["quiet", "manifest", "base_url", "title"];

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

fn default_title() -> String {
    "Songs".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TunetagConfig {
    /// Map of site names to their root directories
    #[serde(default)]
    pub sites: HashMap<String, PathBuf>,

    /// The default site to use when none is specified
    #[serde(default)]
    pub default_site: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Manifest location relative to a site root
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Public address of the catalog page, used when printing shareable links
    #[serde(default)]
    pub base_url: Option<String>,

    /// Heading of rendered pages
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for TunetagConfig {
    fn default() -> Self {
        Self {
            sites: HashMap::new(),
            default_site: None,
            quiet: false,
            manifest: default_manifest(),
            base_url: None,
            title: default_title(),
        }
    }
}

impl TunetagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("tunetag").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a site to the configuration
    ///
    /// Does not save; callers persist with [`TunetagConfig::save_to`].
    pub fn add_site(&mut self, name: String, root: PathBuf) {
        self.sites.insert(name, root);
    }

    /// Remove a site, clearing the default if it pointed there
    pub fn remove_site(&mut self, name: &str) -> Option<PathBuf> {
        let removed = self.sites.remove(name);
        if self.default_site.as_deref() == Some(name) {
            self.default_site = None;
        }
        removed
    }

    /// Get a site root by name
    #[must_use]
    pub fn get_site(&self, name: &str) -> Option<&PathBuf> {
        self.sites.get(name)
    }

    /// List all site names, sorted
    #[must_use]
    pub fn list_sites(&self) -> Vec<&String> {
        let mut names: Vec<_> = self.sites.keys().collect();
        names.sort();
        names
    }

    /// Set the default site
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the site name doesn't exist in the configuration.
    pub fn set_default_site(&mut self, name: String) -> Result<(), ConfigError> {
        if !self.sites.contains_key(&name) {
            return Err(ConfigError::Message(
                format!("Site '{name}' does not exist in configuration")
            ));
        }
        self.default_site = Some(name);
        Ok(())
    }

    /// Get the default site name
    #[must_use]
    pub const fn get_default_site(&self) -> Option<&String> {
        self.default_site.as_ref()
    }

    /// Update a single setting from its string form
    ///
    /// Does not save; callers persist with [`TunetagConfig::save`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value is invalid.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => {
                self.quiet = value.parse::<bool>().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                    ))
                })?;
            }
            "manifest" => {
                if value.is_empty() {
                    return Err(ConfigError::Message("manifest cannot be empty".into()));
                }
                self.manifest = value.to_string();
            }
            "base_url" => {
                if value.is_empty() {
                    self.base_url = None;
                } else {
                    url::Url::parse(value).map_err(|e| {
                        ConfigError::Message(format!("Invalid value for base_url: '{value}': {e}"))
                    })?;
                    self.base_url = Some(value.to_string());
                }
            }
            "title" => self.title = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Read a single setting in its string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "quiet" => Ok(self.quiet.to_string()),
            "manifest" => Ok(self.manifest.clone()),
            "base_url" => Ok(self.base_url.clone().unwrap_or_default()),
            "title" => Ok(self.title.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
