//! Service Port
//!
//! An auxiliary service instance supplied by the caller and handed, as a set
//! member, to the resolved provider. Behavior is entirely opaque to the
//! assembly core; only membership matters.

/// An auxiliary service passed through to the produced manager
pub trait Service: Send + Sync {
    /// Identifier used in logs and diagnostics
    fn service_name(&self) -> &str;
}
