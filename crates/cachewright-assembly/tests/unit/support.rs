//! Shared fakes for assembly tests
//!
//! Providers, configurations, and services small enough to assert against.
//! `RecordingManager` keeps the snapshots it was built from so tests can
//! inspect exactly what the provider received.

use std::sync::Arc;

use cachewright_assembly::registry::ProviderRegistry;
use cachewright_domain::error::{Error, Result};
use cachewright_domain::ports::{CacheConfiguration, CacheManager, CachingProvider, Service};
use cachewright_domain::value_objects::{ConfigurationAggregate, ServiceSet};

/// Manager that remembers the snapshots it was constructed from
#[derive(Debug)]
pub struct RecordingManager {
    pub configuration: ConfigurationAggregate,
    pub services: ServiceSet,
}

impl CacheManager for RecordingManager {}

/// A manager type no test provider ever produces
#[derive(Debug)]
pub struct OtherManager;

impl CacheManager for OtherManager {}

/// Provider producing a [`RecordingManager`] from whatever it is handed
#[derive(Debug)]
pub struct RecordingProvider {
    name: &'static str,
}

impl RecordingProvider {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl CachingProvider for RecordingProvider {
    fn provider_name(&self) -> &str {
        self.name
    }

    fn create_manager(
        &self,
        configuration: ConfigurationAggregate,
        services: ServiceSet,
    ) -> Result<Arc<dyn CacheManager>> {
        Ok(Arc::new(RecordingManager {
            configuration,
            services,
        }))
    }
}

/// Provider whose construction step always fails
#[derive(Debug)]
pub struct FailingProvider;

impl CachingProvider for FailingProvider {
    fn provider_name(&self) -> &str {
        "failing"
    }

    fn create_manager(
        &self,
        _configuration: ConfigurationAggregate,
        _services: ServiceSet,
    ) -> Result<Arc<dyn CacheManager>> {
        Err(Error::provider("manager construction failed"))
    }
}

/// Opaque cache configuration distinguishable by id
#[derive(Debug)]
pub struct NamedConfig {
    pub id: u32,
}

impl CacheConfiguration for NamedConfig {}

/// Opaque service distinguishable by name
pub struct NamedService {
    name: String,
}

impl NamedService {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Service for NamedService {
    fn service_name(&self) -> &str {
        &self.name
    }
}

/// Build a local registry holding exactly the given providers
pub fn registry_with(providers: Vec<Arc<dyn CachingProvider>>) -> Arc<ProviderRegistry> {
    let registry = ProviderRegistry::new();
    for provider in providers {
        registry.register(provider);
    }
    Arc::new(registry)
}
