//! Cache Configuration Port
//!
//! An opaque configuration object associated with one cache alias. The
//! assembly core only keys configurations by alias and forwards them inside
//! the aggregate; the resolved provider downcasts them back to whatever
//! concrete types it understands.

use downcast_rs::{DowncastSync, impl_downcast};

/// Configuration for a single named cache
pub trait CacheConfiguration: DowncastSync + std::fmt::Debug {}

impl_downcast!(sync CacheConfiguration);
