//! Configuration management for advanced bidding
//!
//! This module handles the SDK configuration handed over at start-up and the
//! file/environment settings used by the command-line tool.

pub mod loader;
pub mod sdk;
pub mod settings;

pub use loader::{ConfigLoader, default_config_path};
pub use sdk::SdkConfiguration;
pub use settings::{BidderSpec, BiddingSettings, LoggingSettings, Settings};
