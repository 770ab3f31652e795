//! Bidder token data structures
//!
//! Defines the token map handed to ad-request assembly and the snapshot the
//! manager swaps in after every generation pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque token produced by a bidder provider
pub type BidderToken = String;

/// Bidder identifier to token. `None` means the provider was consulted but
/// had no token.
pub type BidderTokenMap = BTreeMap<String, Option<BidderToken>>;

/// Immutable result of one generation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    /// Tokens keyed by bidder identifier
    pub tokens: BidderTokenMap,
    /// When the pass completed
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}

impl TokenSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(tokens: BidderTokenMap) -> Self {
        Self {
            tokens,
            generated_at: Utc::now(),
        }
    }

    /// Render the tokens as a JSON object, omitting bidders without a token
    pub fn to_json(&self) -> crate::Result<String> {
        let present: BTreeMap<&str, &str> = self
            .tokens
            .iter()
            .filter_map(|(bidder, token)| token.as_deref().map(|t| (bidder.as_str(), t)))
            .collect();
        Ok(serde_json::to_string(&present)?)
    }

    /// Number of bidders that produced a token
    pub fn token_count(&self) -> usize {
        self.tokens.values().filter(|t| t.is_some()).count()
    }
}

/// Outcome counts of a generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Providers invoked
    pub consulted: usize,
    /// Providers that returned a token
    pub with_token: usize,
    /// Providers that returned no token
    pub without_token: usize,
    /// Providers that failed or panicked
    pub failed: usize,
}
