//! SDK configuration
//!
//! Options the host application hands to SDK start-up.

use crate::bidder::BidderProvider;
use std::sync::Arc;

/// SDK configuration options
#[derive(Debug, Clone)]
pub struct SdkConfiguration {
    /// Advanced bidders to initialize
    pub advanced_bidders: Vec<Arc<dyn BidderProvider>>,
    /// Initial value of the bidding enabled flag
    pub advanced_bidding_enabled: bool,
}

impl SdkConfiguration {
    /// Create an empty configuration with advanced bidding enabled
    pub fn new() -> Self {
        Self {
            advanced_bidders: Vec::new(),
            advanced_bidding_enabled: true,
        }
    }

    /// Add one advanced bidder
    pub fn with_advanced_bidder(mut self, bidder: Arc<dyn BidderProvider>) -> Self {
        self.advanced_bidders.push(bidder);
        self
    }

    /// Replace the advanced bidder list
    pub fn with_advanced_bidders(mut self, bidders: Vec<Arc<dyn BidderProvider>>) -> Self {
        self.advanced_bidders = bidders;
        self
    }

    /// Set the initial bidding enabled flag
    pub fn with_advanced_bidding_enabled(mut self, enabled: bool) -> Self {
        self.advanced_bidding_enabled = enabled;
        self
    }
}

impl Default for SdkConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
