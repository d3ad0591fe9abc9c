//! Manager Builder
//!
//! Fluent accumulator for cache-manager assembly. Callers register named
//! cache configurations and auxiliary services, then call
//! [`ManagerBuilder::build`], which snapshots the accumulated state,
//! resolves the sole registered provider, and delegates manager construction
//! to it.
//!
//! A builder is a plain accumulator with no state machine: `build` borrows,
//! so the same instance may be mutated and built again, and every call
//! produces an independent manager from an independent snapshot.
//!
//! ## Example
//!
//! ```ignore
//! use cachewright_assembly::ManagerBuilder;
//!
//! let manager = ManagerBuilder::new()
//!     .with_cache("users", Arc::new(HeapConfig::with_entries(10_000)))
//!     .with_service(Arc::new(StatisticsService::new()))
//!     .build()?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use cachewright_domain::error::{Error, Result};
use cachewright_domain::ports::{CacheConfiguration, CacheManager, Service};
use cachewright_domain::value_objects::{ConfigurationAggregate, ServiceSet};
use tracing::debug;

use crate::registry::ProviderRegistry;
use crate::resolver::resolve_sole_provider;

/// A reusable bundle of builder mutations
///
/// Extensions package pre-canned configuration (a set of caches and
/// services under one call) without the builder knowing the bundle's
/// contents. An extension must be a pure function of the builder it
/// receives and must return a builder usable for further chaining or an
/// immediate `build`; the associated `Output` type lets an extension hand
/// back something more specific than the builder it was given.
pub trait ManagerConfiguration {
    /// The builder type produced by applying this extension
    type Output;

    /// Apply this bundle of mutations to `builder`
    fn apply(&self, builder: ManagerBuilder) -> Self::Output;
}

/// Plain mutation closures are extensions too
impl<F> ManagerConfiguration for F
where
    F: Fn(ManagerBuilder) -> ManagerBuilder,
{
    type Output = ManagerBuilder;

    fn apply(&self, builder: ManagerBuilder) -> ManagerBuilder {
        self(builder)
    }
}

/// Fluent builder assembling a cache manager from accumulated state
///
/// Single-flow accumulator: no internal synchronization is provided, and
/// concurrent mutation of one instance is not supported. The registry it
/// resolves against is shared and may change between builds; resolution is
/// recomputed fresh on every [`ManagerBuilder::build`] call.
pub struct ManagerBuilder {
    caches: HashMap<String, Arc<dyn CacheConfiguration>>,
    services: ServiceSet,
    registry: Arc<ProviderRegistry>,
}

impl ManagerBuilder {
    /// Create a builder with no caches, no services, and the global registry
    pub fn new() -> Self {
        Self::with_registry(ProviderRegistry::global())
    }

    /// Create a builder resolving against an explicit registry
    pub fn with_registry(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            caches: HashMap::new(),
            services: ServiceSet::new(),
            registry,
        }
    }

    /// Associate `config` with `alias`, replacing any earlier registration
    ///
    /// Last write wins; replacement is silent apart from a debug event.
    pub fn with_cache(mut self, alias: impl Into<String>, config: Arc<dyn CacheConfiguration>) -> Self {
        let alias = alias.into();
        if self.caches.insert(alias.clone(), config).is_some() {
            debug!(%alias, "replacing earlier cache configuration");
        }
        self
    }

    /// Add `service` unless the same instance is already registered
    pub fn with_service(mut self, service: Arc<dyn Service>) -> Self {
        if !self.services.insert(Arc::clone(&service)) {
            debug!(service = service.service_name(), "service instance already registered");
        }
        self
    }

    /// Apply a [`ManagerConfiguration`] extension
    ///
    /// Returns whatever builder the extension produces, so an extension can
    /// narrow the chain toward a more specific manager type.
    pub fn with_configuration<C: ManagerConfiguration>(self, configuration: C) -> C::Output {
        configuration.apply(self)
    }

    /// Assemble a manager from the current state
    ///
    /// Snapshots the alias mapping and service set, resolves the sole
    /// registered provider, and delegates construction to it. Resolver
    /// failures propagate unchanged and nothing is constructed on failure.
    pub fn build(&self) -> Result<Arc<dyn CacheManager>> {
        let configuration = ConfigurationAggregate::new(self.caches.clone());
        let services = self.services.clone();
        debug!(
            caches = configuration.len(),
            services = services.len(),
            "assembling cache manager"
        );
        let provider = resolve_sole_provider(&self.registry).into_result()?;
        provider.create_manager(configuration, services)
    }

    /// Assemble a manager and downcast it to the concrete type `M`
    ///
    /// A provider returning some other manager type surfaces here as
    /// [`Error::ManagerTypeMismatch`] instead of at first use.
    pub fn build_as<M: CacheManager>(&self) -> Result<Arc<M>> {
        self.build()?
            .downcast_arc::<M>()
            .map_err(|_| Error::manager_type_mismatch::<M>())
    }
}

impl Default for ManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ManagerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagerBuilder")
            .field("cache_aliases", &self.caches.keys().collect::<Vec<_>>())
            .field("service_count", &self.services.len())
            .field("registry", &self.registry)
            .finish()
    }
}
