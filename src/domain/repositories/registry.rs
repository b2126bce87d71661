//! Registry trait for code/URL mappings.

use crate::domain::entities::{ShortCode, ShortUrl, ValidUrl};
use async_trait::async_trait;

/// Errors a registry can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Every code in the `u64` range has been issued.
    #[error("short code space exhausted")]
    Exhausted,
}

/// Bidirectional store between canonical URLs and short codes.
///
/// # Guarantees
///
/// - Each code maps to exactly one URL and each URL to exactly one code
/// - Codes start at [`ShortCode::FIRST`] and increase by one
/// - Entries are never removed, mutated, or reassigned
///
/// `submit` must be atomic: two concurrent submissions of the same URL
/// observe the same code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryRegistry`] - process-local maps
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registry: Send + Sync {
    /// Returns the record for `url`, registering it under a fresh code if unseen.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Exhausted`] if no further code can be issued.
    async fn submit(&self, url: ValidUrl) -> Result<ShortUrl, RegistryError>;

    /// Looks up the record registered under `code`.
    async fn resolve(&self, code: ShortCode) -> Option<ShortUrl>;

    /// Number of registered URLs.
    async fn count(&self) -> usize;
}
