//! Error type definitions
//!
//! Defines the main error types used throughout the advanced bidding crate.

use thiserror::Error;

/// Main error type for advanced bidding
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A bidder provider failed to produce its token
    #[error("Bidder token error for {bidder}: {reason}")]
    ProviderToken { bidder: String, reason: String },

    /// The token map could not be rendered as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a provider token error
    pub fn provider_token(bidder: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProviderToken {
            bidder: bidder.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::config("test config error");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: test config error");
    }

    #[test]
    fn test_provider_token_error() {
        let err = Error::provider_token("AdNetworkA", "sdk not initialized");
        assert!(matches!(err, Error::ProviderToken { .. }));
        assert_eq!(
            err.to_string(),
            "Bidder token error for AdNetworkA: sdk not initialized"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid");
        assert!(toml_err.is_err());

        let err: Error = toml_err.unwrap_err().into();
        assert!(matches!(err, Error::TomlParse(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
