//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation.

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory name under the platform config directory
const CONFIG_DIR_NAME: &str = "advanced-bidding";

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Load configuration with precedence order:
    /// 1. Environment variables (highest priority)
    /// 2. Configuration file
    /// 3. Default values (lowest priority)
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading configuration from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;

        settings.validate()?;

        info!(
            bidders = settings.bidding.bidders.len(),
            enabled = settings.bidding.enabled,
            "Configuration loaded successfully"
        );
        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Default configuration file location, `<config_dir>/advanced-bidding/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BidderSpec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_defaults() {
        let loader = ConfigLoader::new();
        let settings = loader.load(None).unwrap();

        assert!(settings.bidding.bidders.is_empty());
        assert_eq!(loader.defaults(), &Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[bidding]
bidders = [
    {{ name = "AdNetworkA", token = "tokenA" }},
    {{ name = "AdNetworkB" }},
]

[logging]
level = "debug"
        "#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        let settings = loader.load(Some(temp_file.path())).unwrap();

        assert_eq!(settings.bidding.bidders.len(), 2);
        assert_eq!(
            settings.bidding.bidders[0],
            BidderSpec::new("AdNetworkA", Some("tokenA".to_string()))
        );
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new();
        let settings = loader.load(Some(&dir.path().join("absent.toml"))).unwrap();

        assert!(settings.bidding.bidders.is_empty());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[bidding\nenabled = maybe").unwrap();

        let loader = ConfigLoader::new();
        let err = loader.load(Some(temp_file.path())).unwrap_err();
        assert!(matches!(err, crate::Error::TomlParse(_)));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[[bidding.bidders]]
name = ""
        "#
        )
        .unwrap();

        let loader = ConfigLoader::new();
        assert!(loader.load(Some(temp_file.path())).is_err());
    }

    #[test]
    fn test_env_var_override() {
        unsafe {
            std::env::set_var("ADVANCED_BIDDING_ENABLED", "TRUE");
        }

        let mut settings = Settings::default();
        settings.bidding.enabled = false;
        let merged = settings.merge_with_env();

        unsafe {
            std::env::remove_var("ADVANCED_BIDDING_ENABLED");
        }

        let merged = merged.unwrap();
        assert!(merged.bidding.enabled);
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("advanced-bidding/config.toml"));
        }
    }
}
