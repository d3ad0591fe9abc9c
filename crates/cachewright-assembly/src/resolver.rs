//! Sole-Provider Resolution
//!
//! Enumerates a provider registry and selects exactly one provider. The
//! outcome is a total three-way result so the exactly-one invariant stays
//! explicit and testable in isolation from registration mechanics: an empty
//! table and an ambiguous table are distinct outcomes, never an iterator
//! exhaustion detail.
//!
//! Resolution re-runs on every assembly; no result is memoized anywhere.

use std::sync::Arc;

use cachewright_domain::error::{Error, Result};
use cachewright_domain::ports::CachingProvider;
use tracing::{debug, warn};

use crate::registry::ProviderRegistry;

/// Outcome of enumerating a provider registry
#[derive(Debug)]
pub enum ProviderResolution {
    /// No provider is registered
    None,
    /// Exactly one provider is registered
    One(Arc<dyn CachingProvider>),
    /// More than one provider is registered; holds every registered name
    Many(Vec<String>),
}

impl ProviderResolution {
    /// Map the resolution onto the assembly error taxonomy
    pub fn into_result(self) -> Result<Arc<dyn CachingProvider>> {
        match self {
            Self::None => Err(Error::NoProviderAvailable),
            Self::One(provider) => Ok(provider),
            Self::Many(providers) => Err(Error::ambiguous_provider(providers)),
        }
    }
}

/// Select the sole provider visible in `registry`
///
/// More than one candidate is always unrecoverable ambiguity: no weighting,
/// priority, or configuration-driven tie-break exists.
pub fn resolve_sole_provider(registry: &ProviderRegistry) -> ProviderResolution {
    let mut providers = registry.snapshot();
    match providers.len() {
        0 => {
            debug!("no caching provider registered");
            ProviderResolution::None
        }
        1 => {
            let provider = providers.remove(0);
            debug!(provider = provider.provider_name(), "resolved sole caching provider");
            ProviderResolution::One(provider)
        }
        _ => {
            let names: Vec<String> = providers
                .iter()
                .map(|provider| provider.provider_name().to_string())
                .collect();
            warn!(providers = ?names, "ambiguous caching provider set");
            ProviderResolution::Many(names)
        }
    }
}
