//! Type definitions for advanced bidding
//!
//! This module contains the token map and generation result structures.

pub mod tokens;

pub use tokens::{BidderToken, BidderTokenMap, GenerationSummary, TokenSnapshot};
