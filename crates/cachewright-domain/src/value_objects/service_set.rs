//! Service Set
//!
//! Deduplicated collection of auxiliary service instances. Membership is
//! decided by instance identity (shared `Arc` allocation), not structural
//! equality; registration order carries no meaning.

use std::sync::Arc;

use crate::ports::service::Service;

/// The set of services handed to the resolved provider at assembly time
#[derive(Clone, Default)]
pub struct ServiceSet {
    services: Vec<Arc<dyn Service>>,
}

impl ServiceSet {
    /// Create an empty service set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a service unless the same instance is already present
    ///
    /// Returns `true` if the instance was newly added.
    pub fn insert(&mut self, service: Arc<dyn Service>) -> bool {
        if self.contains(&service) {
            return false;
        }
        self.services.push(service);
        true
    }

    /// Check whether the exact instance is already a member
    pub fn contains(&self, service: &Arc<dyn Service>) -> bool {
        self.services.iter().any(|member| Arc::ptr_eq(member, service))
    }

    /// Iterate over the member services
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Service>> {
        self.services.iter()
    }

    /// Names of every member service, for diagnostics
    pub fn service_names(&self) -> Vec<&str> {
        self.services.iter().map(|service| service.service_name()).collect()
    }

    /// Number of member services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Check whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for ServiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSet")
            .field("service_count", &self.services.len())
            .field("service_names", &self.service_names())
            .finish()
    }
}
