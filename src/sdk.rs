//! SDK start-up
//!
//! Wires an [`SdkConfiguration`] into the bidding token manager owned by the
//! host application's composition root.

use crate::{
    bidding::BiddingTokenManager, config::SdkConfiguration, types::GenerationSummary,
};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Initialize advanced bidding from the SDK configuration
///
/// Applies the configured enabled flag and starts token generation for the
/// configured bidders in the background. Must be called from within a tokio
/// runtime. The returned handle can be awaited or dropped.
pub fn initialize_sdk(
    configuration: &SdkConfiguration,
    manager: &Arc<BiddingTokenManager>,
) -> JoinHandle<GenerationSummary> {
    tracing::info!(
        bidders = configuration.advanced_bidders.len(),
        enabled = configuration.advanced_bidding_enabled,
        "Initializing SDK"
    );

    manager.set_bidding_enabled(configuration.advanced_bidding_enabled);
    manager.spawn_generate_tokens(configuration.advanced_bidders.clone())
}
