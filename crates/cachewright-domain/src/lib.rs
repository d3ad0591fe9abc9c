//! Domain Layer - Cachewright
//!
//! Core contracts for cache-manager assembly: the port traits the assembly
//! core consumes, the value objects it snapshots, and the error taxonomy it
//! raises.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines ports (interfaces) for every external collaborator
//! - Holds the value objects handed to a resolved provider
//! - Has no dependencies on the assembly machinery or any runtime
//!
//! ## Ports (Interfaces)
//!
//! - [`ports::CachingProvider`]: turns aggregated configuration into a live manager
//! - [`ports::CacheManager`]: the opaque product of assembly
//! - [`ports::CacheConfiguration`]: an opaque named-cache configuration
//! - [`ports::Service`]: an opaque auxiliary service instance
//!
//! ## Value Objects
//!
//! - [`value_objects::ConfigurationAggregate`]: immutable alias/configuration snapshot
//! - [`value_objects::ServiceSet`]: identity-deduplicated service collection

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
