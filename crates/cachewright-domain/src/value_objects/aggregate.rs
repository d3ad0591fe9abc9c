//! Configuration Aggregate
//!
//! Immutable snapshot of every named cache configuration at the moment of
//! assembly. Constructed once per `build` call and handed to the resolved
//! provider; never mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::configuration::CacheConfiguration;

/// Snapshot of the alias to configuration mapping taken at assembly time
///
/// Aliases are unique within one aggregate; the builder that produced the
/// snapshot already applied last-write-wins for duplicate registrations.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationAggregate {
    caches: HashMap<String, Arc<dyn CacheConfiguration>>,
}

impl ConfigurationAggregate {
    /// Create an aggregate from a resolved alias mapping
    pub fn new(caches: HashMap<String, Arc<dyn CacheConfiguration>>) -> Self {
        Self { caches }
    }

    /// Get the configuration registered under `alias`
    pub fn get(&self, alias: &str) -> Option<&Arc<dyn CacheConfiguration>> {
        self.caches.get(alias)
    }

    /// Check whether a configuration exists for `alias`
    pub fn contains_alias(&self, alias: &str) -> bool {
        self.caches.contains_key(alias)
    }

    /// Every alias in the aggregate, in no particular order
    pub fn aliases(&self) -> Vec<&str> {
        self.caches.keys().map(String::as_str).collect()
    }

    /// Iterate over alias/configuration pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn CacheConfiguration>)> {
        self.caches.iter().map(|(alias, config)| (alias.as_str(), config))
    }

    /// Number of named cache configurations
    pub fn len(&self) -> usize {
        self.caches.len()
    }

    /// Check whether the aggregate holds no configurations
    pub fn is_empty(&self) -> bool {
        self.caches.is_empty()
    }
}
