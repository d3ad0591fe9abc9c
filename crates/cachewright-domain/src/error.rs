//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cache-manager assembly
#[derive(Error, Debug)]
pub enum Error {
    /// No caching provider is registered at assembly time
    #[error("no caching provider registered")]
    NoProviderAvailable,

    /// More than one caching provider is registered at assembly time
    #[error("multiple caching providers registered: {}", .providers.join(", "))]
    AmbiguousProvider {
        /// Names of every registered provider
        providers: Vec<String>,
    },

    /// The produced manager is not of the concrete type the caller requested
    #[error("cache manager type mismatch: expected {expected}")]
    ManagerTypeMismatch {
        /// The concrete manager type the caller asked for
        expected: &'static str,
    },

    /// A resolved provider failed while constructing the manager
    #[error("provider error: {message}")]
    Provider {
        /// Description of the provider failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an ambiguous provider error from the registered names
    pub fn ambiguous_provider<I, S>(providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AmbiguousProvider {
            providers: providers.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a manager type mismatch error for the requested type
    pub fn manager_type_mismatch<M: 'static>() -> Self {
        Self::ManagerTypeMismatch {
            expected: std::any::type_name::<M>(),
        }
    }

    /// Create a provider error
    pub fn provider<S: Into<String>>(message: S) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Create a provider error with source
    pub fn provider_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
