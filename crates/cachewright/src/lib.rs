//! # Cachewright
//!
//! Assembles a runtime cache-management facade from three independently
//! supplied ingredients: named cache configurations, auxiliary service
//! instances, and exactly one discovered caching provider that turns the
//! aggregate into a live manager.
//!
//! Cachewright owns only the assembly: accumulating state in a fluent
//! builder, resolving the sole registered provider, and handing snapshots to
//! it. How a manager stores, evicts, or expires entries is entirely the
//! provider's concern.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cachewright::ManagerBuilder;
//!
//! // A provider crate has registered itself, either through the
//! // CACHING_PROVIDERS distributed slice or at runtime via
//! // ProviderRegistry::global().register(..).
//! let manager = ManagerBuilder::new()
//!     .with_cache("users", Arc::new(HeapConfig::with_entries(10_000)))
//!     .with_service(Arc::new(StatisticsService::new()))
//!     .build()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - ports for every opaque collaborator, the value objects
//!   handed to a provider, and the error taxonomy
//! - `assembly` - the provider registry, sole-provider resolution, and the
//!   manager builder with its extension trait

/// Domain layer - ports, value objects, and the error taxonomy
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cachewright_domain::*;
}

/// Assembly layer - provider registry, resolution, and the manager builder
///
/// Re-exports from the assembly crate for convenience
pub mod assembly {
    pub use cachewright_assembly::*;
}

// Re-export the whole domain surface at the crate root
pub use domain::*;

// Re-export the assembly surface at the crate root
pub use assembly::{
    CACHING_PROVIDERS, ManagerBuilder, ManagerConfiguration, ProviderEntry, ProviderRegistry,
    ProviderResolution, resolve_sole_provider,
};
