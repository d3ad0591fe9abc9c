//! Value objects handed to a resolved provider
//!
//! Both types are snapshots: once produced, later mutation of the builder
//! that created them has no effect on them.

pub mod aggregate;
pub mod service_set;

pub use aggregate::ConfigurationAggregate;
pub use service_set::ServiceSet;
