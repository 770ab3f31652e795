//! Bidder registry
//!
//! Ordered collection of the providers a host wants active. Order matters
//! only for duplicate identifiers: the later registration wins in the map.

use super::{BidderProvider, EnvBidder, StaticBidder, builtin::env_reference};
use crate::config::{BidderSpec, SdkConfiguration};
use std::sync::Arc;

/// Registry of concrete bidder providers supplied by the host
#[derive(Debug, Clone, Default)]
pub struct BidderRegistry {
    providers: Vec<Arc<dyn BidderProvider>>,
}

impl BidderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build built-in providers from configured bidder entries
    ///
    /// A token of the form `${VAR}` becomes an [`EnvBidder`], anything else
    /// a [`StaticBidder`]. An empty token counts as no token.
    pub fn from_specs(specs: &[BidderSpec]) -> Self {
        let mut registry = Self::new();
        for spec in specs {
            let token = spec.token.as_deref().filter(|t| !t.is_empty());
            let provider: Arc<dyn BidderProvider> = match token.and_then(env_reference) {
                Some(var) => Arc::new(EnvBidder::new(&spec.name, var)),
                None => Arc::new(StaticBidder::new(&spec.name, token.map(str::to_string))),
            };
            registry.register(provider);
        }
        tracing::debug!(bidders = registry.len(), "Built bidder registry from settings");
        registry
    }

    /// Append a provider
    pub fn register(&mut self, provider: Arc<dyn BidderProvider>) -> &mut Self {
        tracing::debug!(bidder = provider.identifier(), "Registered bidder");
        self.providers.push(provider);
        self
    }

    /// Registered providers in registration order
    pub fn providers(&self) -> Vec<Arc<dyn BidderProvider>> {
        self.providers.clone()
    }

    /// Identifiers in registration order
    pub fn identifiers(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| p.identifier().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Hand the providers to an SDK configuration
    pub fn into_configuration(self) -> SdkConfiguration {
        SdkConfiguration::new().with_advanced_bidders(self.providers)
    }
}

impl FromIterator<Arc<dyn BidderProvider>> for BidderRegistry {
    fn from_iter<I: IntoIterator<Item = Arc<dyn BidderProvider>>>(iter: I) -> Self {
        Self {
            providers: iter.into_iter().collect(),
        }
    }
}
