//! Caching Provider Port
//!
//! The singleton implementation responsible for turning aggregated
//! configuration into a live manager. Exactly one provider must be
//! registered in-process for assembly to succeed; the assembly core consumes
//! this port and never implements it.

use std::sync::Arc;

use crate::error::Result;
use crate::ports::manager::CacheManager;
use crate::value_objects::{ConfigurationAggregate, ServiceSet};

/// Provider contract consumed at assembly time
pub trait CachingProvider: Send + Sync + std::fmt::Debug {
    /// Name used in registry listings and ambiguity diagnostics
    fn provider_name(&self) -> &str;

    /// Construct a manager from the configuration snapshot and service set
    ///
    /// Both arguments are value snapshots owned by the provider from this
    /// point on; the builder that produced them keeps no reference.
    fn create_manager(
        &self,
        configuration: ConfigurationAggregate,
        services: ServiceSet,
    ) -> Result<Arc<dyn CacheManager>>;
}
