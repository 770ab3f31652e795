//! Advanced Bidding - bidder token management
//!
//! Collects per-provider bidder tokens for real-time-bidding ad auctions and
//! exposes them as a map and as a JSON string for ad-request assembly.
//!
//! # Architecture
//!
//! - **[`BiddingTokenManager`]**: enable flag plus the token map of the last
//!   generation pass. The host owns it (usually behind an `Arc`) and passes
//!   it to whoever assembles ad requests.
//! - **[`SdkConfiguration`]**: the bidders the host wants initialized,
//!   handed to [`sdk::initialize_sdk`] at start-up.
//! - **[`bidder::BidderProvider`]**: the capability each ad network adapter
//!   implements.
//!
//! # Examples
//!
//! ```rust
//! use advanced_bidding::{BiddingTokenManager, SdkConfiguration};
//! use advanced_bidding::bidder::StaticBidder;
//! use advanced_bidding::sdk::initialize_sdk;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let manager = Arc::new(BiddingTokenManager::new());
//! let configuration = SdkConfiguration::new()
//!     .with_advanced_bidder(Arc::new(StaticBidder::new("AdNetworkA", Some("tokenA".into()))));
//!
//! initialize_sdk(&configuration, &manager).await?;
//!
//! if manager.is_bidding_enabled() {
//!     let json = manager.current_token_map_as_json().await;
//!     assert_eq!(json.as_deref(), Some(r#"{"AdNetworkA":"tokenA"}"#));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```

pub mod bidder;
pub mod bidding;
pub mod cli;
pub mod config;
pub mod error;
pub mod sdk;
pub mod types;

pub use bidding::BiddingTokenManager;
pub use config::{SdkConfiguration, Settings};
pub use error::{Error, Result};
pub use types::{BidderTokenMap, GenerationSummary, TokenSnapshot};
