//! Bidder providers
//!
//! The provider capability consumed by the token manager, the registry the
//! host fills with concrete providers, and a couple of built-in providers.

pub mod builtin;
pub mod provider;
pub mod registry;

pub use builtin::{EnvBidder, StaticBidder};
pub use provider::BidderProvider;
pub use registry::BidderRegistry;
