//! Built-in bidder providers
//!
//! Providers backed by a fixed value or an environment variable. Hosts with
//! real ad network adapters implement [`BidderProvider`] themselves.

use super::BidderProvider;
use crate::Result;
use async_trait::async_trait;

/// Provider returning a fixed token
#[derive(Debug, Clone)]
pub struct StaticBidder {
    identifier: String,
    token: Option<String>,
}

impl StaticBidder {
    /// Create a provider with the given token (or none)
    pub fn new(identifier: impl Into<String>, token: Option<String>) -> Self {
        Self {
            identifier: identifier.into(),
            token,
        }
    }
}

#[async_trait]
impl BidderProvider for StaticBidder {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    async fn token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }
}

/// Provider reading its token from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvBidder {
    identifier: String,
    var: String,
}

impl EnvBidder {
    /// Create a provider bound to `var`
    pub fn new(identifier: impl Into<String>, var: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            var: var.into(),
        }
    }

    /// Name of the environment variable
    pub fn var(&self) -> &str {
        &self.var
    }
}

#[async_trait]
impl BidderProvider for EnvBidder {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    async fn token(&self) -> Result<Option<String>> {
        match std::env::var(&self.var) {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            Ok(_) | Err(std::env::VarError::NotPresent) => {
                tracing::debug!(
                    bidder = %self.identifier,
                    env_var = %self.var,
                    "Environment variable not set for bidder token"
                );
                Ok(None)
            }
            Err(e) => Err(crate::Error::provider_token(
                &self.identifier,
                format!("cannot read {}: {}", self.var, e),
            )),
        }
    }
}

/// Parse `${VAR}` into `VAR`
pub(crate) fn env_reference(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}
