//! Configuration module for splitview
//!
//! Manages the layout preset, the auto-selection policy flag, an optional
//! catalog file and logging defaults. Configuration is stored in the user's
//! config directory (`~/.config/splitview/config.toml` on Linux); a missing
//! file means defaults.

use crate::browse::Variant;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SplitviewConfig {
    /// Layout preset to open
    pub variant: Variant,

    /// Select the first item whenever the category or search filter changes
    pub auto_select_on_navigate: bool,

    /// TOML catalog replacing the built-in seed data
    pub catalog: Option<PathBuf>,

    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,

    /// Default tracing filter (overridden by `RUST_LOG`)
    pub log_filter: String,
}

impl Default for SplitviewConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            auto_select_on_navigate: true,
            catalog: None,
            tick_rate_ms: 100,
            log_filter: "splitview=info".to_string(),
        }
    }
}

impl SplitviewConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("splitview").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file
    ///
    /// Keys missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to an explicit file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
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

    /// Event poll timeout
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SplitviewConfig::default();
        assert_eq!(config.variant, Variant::ThreeColumn);
        assert!(config.auto_select_on_navigate);
        assert!(config.catalog.is_none());
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "variant = \"simple\"\nauto_select_on_navigate = false\n").unwrap();

        let config = SplitviewConfig::load_from(&path).unwrap();

        assert_eq!(config.variant, Variant::Simple);
        assert!(!config.auto_select_on_navigate);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_filter, "splitview=info");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = SplitviewConfig {
            variant: Variant::TwoColumn,
            catalog: Some(PathBuf::from("/tmp/catalog.toml")),
            tick_rate_ms: 250,
            ..SplitviewConfig::default()
        };

        config.save_to(&path).unwrap();

        assert_eq!(SplitviewConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_variant_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "variant = \"four-column\"\n").unwrap();

        assert!(SplitviewConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SplitviewConfig::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
