//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
#[allow(dead_code)]
pub mod helpers {
    use advanced_bidding::{
        BidderTokenMap, Result,
        bidder::{BidderProvider, StaticBidder},
    };
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Static bidder behind the trait object the manager consumes
    pub fn static_bidder(id: &str, token: Option<&str>) -> Arc<dyn BidderProvider> {
        Arc::new(StaticBidder::new(id, token.map(str::to_string)))
    }

    /// Build an expected token map
    pub fn token_map(entries: &[(&str, Option<&str>)]) -> BidderTokenMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    /// Bidder that hands out a new token on every call
    #[derive(Debug, Default)]
    pub struct RotatingBidder {
        calls: AtomicUsize,
    }

    impl RotatingBidder {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BidderProvider for RotatingBidder {
        fn identifier(&self) -> &str {
            "RotatingNetwork"
        }

        async fn token(&self) -> Result<Option<String>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(Some(format!("rotating_{}", call)))
        }
    }
}
