//! Cache Manager Port
//!
//! The opaque product of assembly. The core hands a manager back to the
//! caller as sole owner and retains no reference to it. Downcast support
//! lets callers recover a provider's concrete manager type through a checked
//! conversion instead of an unchecked cast.

use downcast_rs::{DowncastSync, impl_downcast};

/// A live cache manager produced by a caching provider
///
/// The assembly core never invokes anything on a manager; how entries are
/// stored, evicted, or expired is entirely the provider's concern.
pub trait CacheManager: DowncastSync + std::fmt::Debug {}

impl_downcast!(sync CacheManager);
