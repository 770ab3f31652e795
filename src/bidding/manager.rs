//! # Bidding Token Manager
//!
//! Single source of truth for advanced bidding enablement and the current
//! bidder token map.
//!
//! ## Architecture
//!
//! The manager keeps the result of the last generation pass as an immutable
//! [`TokenSnapshot`] behind an `Arc`. A pass builds the complete new map
//! without holding any lock and only takes the write lock to swap the
//! pointer, so readers never observe a half-populated map and keep seeing
//! the previous tokens while slow providers are still running.
//!
//! Passes may overlap when generation is re-triggered. Each pass takes a
//! sequence number when it starts and a finished pass is only stored if no
//! later-started pass has been stored already, so the newest request wins.
//!
//! ## Examples
//!
//! ```rust
//! use advanced_bidding::bidder::{BidderProvider, StaticBidder};
//! use advanced_bidding::bidding::BiddingTokenManager;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let manager = BiddingTokenManager::new();
//! let providers: Vec<Arc<dyn BidderProvider>> = vec![
//!     Arc::new(StaticBidder::new("AdNetworkA", Some("tokenA".to_string()))),
//!     Arc::new(StaticBidder::new("AdNetworkB", None)),
//! ];
//!
//! manager.generate_tokens(&providers).await;
//! assert_eq!(
//!     manager.current_token_map_as_json().await.as_deref(),
//!     Some(r#"{"AdNetworkA":"tokenA"}"#)
//! );
//! # });
//! ```
//!
//! ## JSON Convention
//!
//! Bidders without a token stay in [`BiddingTokenManager::current_token_map`]
//! with a `None` value but are left out of the JSON object.

use crate::{
    bidder::BidderProvider,
    types::{BidderTokenMap, GenerationSummary, TokenSnapshot},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Manager for advanced bidding tokens
#[derive(Debug)]
pub struct BiddingTokenManager {
    /// Whether tokens should be attached to ad requests
    enabled: AtomicBool,
    /// Result of the newest stored generation pass
    snapshot: RwLock<Option<StoredSnapshot>>,
    /// Sequence number handed to the next pass
    next_generation: AtomicU64,
}

#[derive(Debug)]
struct StoredSnapshot {
    generation: u64,
    snapshot: Arc<TokenSnapshot>,
}

impl BiddingTokenManager {
    /// Creates a manager with bidding enabled and no tokens yet.
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            snapshot: RwLock::new(None),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Whether advanced bidding is enabled. Defaults to `true`.
    pub fn is_bidding_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Enable or disable advanced bidding.
    ///
    /// This is a flag for ad-request assembly; it does not stop
    /// [`generate_tokens`](Self::generate_tokens) from running.
    pub fn set_bidding_enabled(&self, enabled: bool) {
        let previous = self.enabled.swap(enabled, Ordering::AcqRel);
        if previous != enabled {
            tracing::info!(enabled, "Advanced bidding toggled");
        }
    }

    /// The token map from the last generation pass, `None` before the first one.
    pub async fn current_token_map(&self) -> Option<BidderTokenMap> {
        self.snapshot().await.map(|s| s.tokens.clone())
    }

    /// JSON object string of the current token map.
    ///
    /// Returns `None` when no map has been generated yet, or when the map
    /// cannot be serialized (logged, never returned as an error).
    pub async fn current_token_map_as_json(&self) -> Option<String> {
        let snapshot = self.snapshot().await?;
        match snapshot.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize bidder tokens");
                None
            }
        }
    }

    /// Shared handle to the current snapshot
    pub async fn snapshot(&self) -> Option<Arc<TokenSnapshot>> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .map(|stored| Arc::clone(&stored.snapshot))
    }

    /// When the current map was generated
    pub async fn last_generated_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot().await.map(|s| s.generated_at)
    }

    /// Generates bidder tokens from the given providers.
    ///
    /// Every provider is asked for its token on its own task; results are
    /// recorded in list order into a fresh map which then replaces the
    /// previous one. A provider that returns no token, returns an error or
    /// panics gets a `None` entry and does not affect the others. For
    /// duplicate identifiers the later provider wins.
    ///
    /// When passes overlap, the result of the pass that started last is kept
    /// and an older pass finishing afterwards is discarded.
    ///
    /// Provider calls have no timeout, so one slow provider delays the whole
    /// pass. Use [`spawn_generate_tokens`](Self::spawn_generate_tokens) when
    /// the caller must not wait.
    pub async fn generate_tokens(&self, providers: &[Arc<dyn BidderProvider>]) -> GenerationSummary {
        let generation = self.next_generation.fetch_add(1, Ordering::AcqRel);
        tracing::info!(bidders = providers.len(), generation, "Generating bidder tokens");

        let handles: Vec<(String, JoinHandle<crate::Result<Option<String>>>)> = providers
            .iter()
            .map(|provider| {
                let identifier = provider.identifier().to_string();
                let provider = Arc::clone(provider);
                (identifier, tokio::spawn(async move { provider.token().await }))
            })
            .collect();

        let mut tokens = BidderTokenMap::new();
        let mut summary = GenerationSummary::default();

        for (identifier, handle) in handles {
            summary.consulted += 1;

            let token = match handle.await {
                Ok(Ok(Some(token))) => {
                    tracing::debug!(bidder = %identifier, "Bidder token generated");
                    summary.with_token += 1;
                    Some(token)
                }
                Ok(Ok(None)) => {
                    tracing::debug!(bidder = %identifier, "Bidder has no token yet");
                    summary.without_token += 1;
                    None
                }
                Ok(Err(e)) => {
                    tracing::warn!(bidder = %identifier, error = %e, "Bidder token generation failed");
                    summary.failed += 1;
                    None
                }
                Err(e) => {
                    let err = crate::Error::provider_token(&identifier, e.to_string());
                    tracing::warn!(bidder = %identifier, error = %err, "Bidder token task aborted");
                    summary.failed += 1;
                    None
                }
            };

            if tokens.insert(identifier.clone(), token).is_some() {
                tracing::warn!(bidder = %identifier, "Duplicate bidder identifier, keeping the later token");
            }
        }

        let snapshot = Arc::new(TokenSnapshot::new(tokens));
        {
            let mut current = self.snapshot.write().await;
            if let Some(stored) = current.as_ref()
                && stored.generation > generation
            {
                tracing::debug!(
                    generation,
                    stored = stored.generation,
                    "Newer bidder tokens already stored, discarding stale pass"
                );
                return summary;
            }
            *current = Some(StoredSnapshot {
                generation,
                snapshot,
            });
        }

        tracing::info!(
            consulted = summary.consulted,
            with_token = summary.with_token,
            without_token = summary.without_token,
            failed = summary.failed,
            "Bidder tokens updated"
        );

        summary
    }

    /// Runs [`generate_tokens`](Self::generate_tokens) on a background task.
    ///
    /// Readers keep seeing the previous map until the task completes. The
    /// handle may be dropped for fire-and-forget use.
    pub fn spawn_generate_tokens(
        self: &Arc<Self>,
        providers: Vec<Arc<dyn BidderProvider>>,
    ) -> JoinHandle<GenerationSummary> {
        let manager = Arc::clone(self);
        tokio::spawn(async move { manager.generate_tokens(&providers).await })
    }
}

impl Default for BiddingTokenManager {
    fn default() -> Self {
        Self::new()
    }
}
