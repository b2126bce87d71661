//! Host resolver trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("DNS lookup failed: {0}")]
    Lookup(#[from] std::io::Error),

    #[error("DNS lookup returned no addresses")]
    NoAddresses,

    #[error("DNS lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Trait for checking that a hostname resolves.
///
/// Used by the strict validation mode. Implementations attempt the lookup
/// exactly once and must bound how long they wait.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - OS resolver via tokio
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host`, succeeding if it yields at least one address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the lookup fails, times out, or is empty.
    async fn resolve(&self, host: &str) -> Result<(), ResolveError>;
}
