//! Caching Provider Registry
//!
//! Explicit discovery table for caching providers. A provider makes itself
//! visible either at link time via [`CACHING_PROVIDERS`] (`linkme`
//! distributed slice, folded into the global registry on first access) or at
//! runtime via [`ProviderRegistry::register`].
//!
//! Registration and resolution are deliberately separate operations: the
//! resolver (see [`crate::resolver`]) only reads the table, so tests can run
//! against locally constructed registries holding zero, one, or many
//! providers.
//!
//! ## Registering a provider at link time
//!
//! ```ignore
//! use cachewright_assembly::registry::{CACHING_PROVIDERS, ProviderEntry};
//!
//! #[linkme::distributed_slice(CACHING_PROVIDERS)]
//! static HEAP_PROVIDER: ProviderEntry = ProviderEntry {
//!     name: "heap",
//!     description: "On-heap cache manager provider",
//!     factory: || Arc::new(HeapCachingProvider::new()),
//! };
//! ```

use std::sync::{Arc, LazyLock, RwLock};

use cachewright_domain::ports::CachingProvider;
use tracing::debug;

/// Registry entry submitted by a provider crate
///
/// The factory runs once, when the global registry is first accessed, and
/// the produced instance lives for the rest of the process.
pub struct ProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory producing the process-wide provider instance
    pub factory: fn() -> Arc<dyn CachingProvider>,
}

/// Link-time provider submissions, collected into the global registry
#[linkme::distributed_slice]
pub static CACHING_PROVIDERS: [ProviderEntry] = [..];

static GLOBAL: LazyLock<Arc<ProviderRegistry>> = LazyLock::new(|| {
    let registry = ProviderRegistry::new();
    for entry in CACHING_PROVIDERS {
        debug!(
            provider = entry.name,
            description = entry.description,
            "registering link-time caching provider"
        );
        registry.register((entry.factory)());
    }
    Arc::new(registry)
});

/// Table of caching provider instances visible to assembly
///
/// The process-wide instance is reached through [`ProviderRegistry::global`];
/// builders accept any registry, so deployments and tests can scope provider
/// visibility explicitly.
pub struct ProviderRegistry {
    providers: RwLock<Vec<Arc<dyn CachingProvider>>>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: RwLock::new(Vec::new()),
        }
    }

    /// The process-wide registry, seeded from [`CACHING_PROVIDERS`] on first access
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    /// Register a provider instance
    ///
    /// Duplicates are not rejected here; a table holding more than one
    /// provider simply fails resolution as ambiguous.
    pub fn register(&self, provider: Arc<dyn CachingProvider>) {
        debug!(provider = provider.provider_name(), "registering caching provider");
        self.providers.write().unwrap().push(provider);
    }

    /// Names of every registered provider, in registration order
    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .read()
            .unwrap()
            .iter()
            .map(|provider| provider.provider_name().to_string())
            .collect()
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.read().unwrap().len()
    }

    /// Check whether no provider is registered
    pub fn is_empty(&self) -> bool {
        self.providers.read().unwrap().is_empty()
    }

    /// Stable copy of the current provider table
    pub(crate) fn snapshot(&self) -> Vec<Arc<dyn CachingProvider>> {
        self.providers.read().unwrap().clone()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.provider_names())
            .finish()
    }
}
