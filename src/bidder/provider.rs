//! Bidder provider capability
//!
//! A bidder provider is an ad network adapter able to produce an opaque
//! token for real-time bidding. The manager only needs its identifier and
//! its current token.

use crate::Result;
use async_trait::async_trait;

/// Trait for bidder providers
#[async_trait]
pub trait BidderProvider: std::fmt::Debug + Send + Sync {
    /// Stable identifier used as the key in the token map
    fn identifier(&self) -> &str;

    /// Current bidder token, or `None` if the provider has none yet
    ///
    /// May call into third-party code of unknown latency.
    async fn token(&self) -> Result<Option<String>>;
}
