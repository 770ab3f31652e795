//! Advanced bidding
//!
//! Holds the enable flag and the bidder token map attached to ad requests.

pub mod manager;

pub use manager::BiddingTokenManager;
