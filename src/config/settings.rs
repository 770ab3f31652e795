//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for advanced bidding.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Log levels accepted by `logging.level`
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Advanced bidding configuration
    pub bidding: BiddingSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Advanced bidding configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiddingSettings {
    /// Attach bidder tokens to ad requests
    pub enabled: bool,
    /// Bidders to initialize, in order
    pub bidders: Vec<BidderSpec>,
}

/// A configured bidder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidderSpec {
    /// Bidder identifier
    pub name: String,
    /// Fixed token, `${VAR}` to read from the environment, or absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for BiddingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            bidders: Vec::new(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
            verbose: false,
        }
    }
}

impl BidderSpec {
    /// Create a bidder entry
    pub fn new(name: impl Into<String>, token: Option<String>) -> Self {
        Self {
            name: name.into(),
            token,
        }
    }

    /// Parse `NAME` or `NAME=TOKEN`
    ///
    /// Name and token are trimmed; an empty token means no token.
    pub fn parse(value: &str) -> crate::Result<Self> {
        let (name, token) = match value.split_once('=') {
            Some((name, token)) => (name.trim(), Some(token.trim().to_string())),
            None => (value.trim(), None),
        };

        if name.is_empty() {
            return Err(crate::Error::config(format!(
                "Invalid bidder '{}': name must not be empty",
                value
            )));
        }

        Ok(Self::new(name, token.filter(|t| !t.is_empty())))
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(enabled) = std::env::var("ADVANCED_BIDDING_ENABLED") {
            self.bidding.enabled = parse_flag(&enabled).ok_or_else(|| {
                crate::Error::config(format!("Invalid ADVANCED_BIDDING_ENABLED: {}", enabled))
            })?;
        }

        if let Ok(level) = std::env::var("ADVANCED_BIDDING_LOG_LEVEL") {
            self.logging.level = level.trim().to_lowercase();
        }

        Ok(self)
    }

    /// Validate the settings
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(index) = self
            .bidding
            .bidders
            .iter()
            .position(|b| b.name.trim().is_empty())
        {
            return Err(crate::Error::config(format!(
                "Bidder #{} has an empty name",
                index + 1
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(crate::Error::config(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Parse `true`/`false`/`1`/`0`, case-insensitive
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
