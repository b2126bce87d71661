//! Short link creation and lookup service.

use std::sync::Arc;

use crate::application::services::url_validator::{UrlValidator, ValidationMode};
use crate::domain::entities::{ShortCode, ShortUrl};
use crate::domain::repositories::Registry;
use crate::error::AppError;
use tracing::{debug, error};

/// Service for shortening URLs and resolving short codes.
///
/// Validation always finishes before the registry is touched, so a slow
/// DNS lookup in strict mode never holds the registry lock.
pub struct LinkService<R: Registry> {
    registry: Arc<R>,
    validator: UrlValidator,
}

impl<R: Registry> LinkService<R> {
    /// Creates a new link service.
    pub fn new(registry: Arc<R>, validator: UrlValidator) -> Self {
        Self {
            registry,
            validator,
        }
    }

    /// Validates `candidate` and returns its short code, allocating one if needed.
    ///
    /// Equivalent spellings of a URL (case, default port, missing root path)
    /// share one code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if validation rejects the input.
    /// Returns [`AppError::Internal`] if the registry cannot issue a code.
    pub async fn shorten(&self, candidate: &str) -> Result<ShortUrl, AppError> {
        let url = match self.validator.validate(candidate).await {
            Ok(url) => url,
            Err(e) => {
                debug!("Rejected URL {:?}: {}", candidate, e);
                metrics::counter!("shorturl_rejected_total").increment(1);
                return Err(AppError::InvalidUrl(e));
            }
        };

        self.registry.submit(url).await.map_err(|e| {
            error!("Failed to register URL: {}", e);
            AppError::Internal(e.to_string())
        })
    }

    /// Looks up the record for a raw path segment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCode`] if `raw_code` is not a positive
    /// integer or was never issued. The two cases are indistinguishable.
    pub async fn resolve(&self, raw_code: &str) -> Result<ShortUrl, AppError> {
        let Some(code) = ShortCode::parse(raw_code) else {
            debug!("Malformed short code {:?}", raw_code);
            return Err(AppError::UnknownCode);
        };

        self.registry.resolve(code).await.ok_or_else(|| {
            debug!("Unknown short code {}", code);
            AppError::UnknownCode
        })
    }

    /// Number of URLs registered so far.
    pub async fn registered_count(&self) -> usize {
        self.registry.count().await
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validator.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ValidUrl;
    use crate::domain::repositories::{MockRegistry, RegistryError};
    use crate::infrastructure::persistence::InMemoryRegistry;

    fn service() -> LinkService<InMemoryRegistry> {
        LinkService::new(Arc::new(InMemoryRegistry::new()), UrlValidator::syntax_only())
    }

    fn record(code: u64, url: &str) -> ShortUrl {
        ShortUrl::new(
            ShortCode::new(code).unwrap(),
            ValidUrl::from_canonical(url.to_string()),
        )
    }

    #[tokio::test]
    async fn test_shorten_is_idempotent() {
        let service = service();

        let first = service.shorten("https://www.example.com").await.unwrap();
        let again = service.shorten("https://www.example.com").await.unwrap();

        assert_eq!(first.code.get(), 1);
        assert_eq!(again.code, first.code);
        assert_eq!(first.original_url.as_str(), "https://www.example.com/");
    }

    #[tokio::test]
    async fn test_shorten_dedups_on_canonical_form() {
        let service = service();

        let a = service.shorten("https://example.com").await.unwrap();
        let b = service.shorten("HTTPS://EXAMPLE.COM:443/").await.unwrap();

        assert_eq!(a.code, b.code);
        assert_eq!(service.registered_count().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_urls_round_trip() {
        let service = service();

        let a = service.shorten("https://a.example.com/1").await.unwrap();
        let b = service.shorten("https://b.example.com/2").await.unwrap();
        assert_ne!(a.code, b.code);

        let resolved_a = service.resolve(&a.code.to_string()).await.unwrap();
        let resolved_b = service.resolve(&b.code.to_string()).await.unwrap();
        assert_eq!(resolved_a.original_url.as_str(), "https://a.example.com/1");
        assert_eq!(resolved_b.original_url.as_str(), "https://b.example.com/2");
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_without_touching_registry() {
        let mut registry = MockRegistry::new();
        registry.expect_submit().times(0);

        let service = LinkService::new(Arc::new(registry), UrlValidator::syntax_only());

        for input in ["not-a-url", "ftp://example.com", "", "http://localhost"] {
            let err = service.shorten(input).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidUrl(_)), "{input:?}");
        }
    }

    #[tokio::test]
    async fn test_shorten_surfaces_exhausted_registry_as_internal() {
        let mut registry = MockRegistry::new();
        registry
            .expect_submit()
            .times(1)
            .returning(|_| Err(RegistryError::Exhausted));

        let service = LinkService::new(Arc::new(registry), UrlValidator::syntax_only());

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_resolve_passes_parsed_code_to_registry() {
        let mut registry = MockRegistry::new();
        registry
            .expect_resolve()
            .withf(|code| code.get() == 7)
            .times(1)
            .returning(|_| Some(record(7, "https://seven.example.com/")));

        let service = LinkService::new(Arc::new(registry), UrlValidator::syntax_only());

        let found = service.resolve("7").await.unwrap();

        assert_eq!(found.original_url.as_str(), "https://seven.example.com/");
    }

    #[tokio::test]
    async fn test_resolve_malformed_codes_skip_registry() {
        let mut registry = MockRegistry::new();
        registry.expect_resolve().times(0);

        let service = LinkService::new(Arc::new(registry), UrlValidator::syntax_only());

        for raw in ["0", "-1", "abc", "1.0", ""] {
            assert!(matches!(
                service.resolve(raw).await,
                Err(AppError::UnknownCode)
            ));
        }
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let service = service();
        service.shorten("https://example.com").await.unwrap();

        assert!(matches!(
            service.resolve("999").await,
            Err(AppError::UnknownCode)
        ));
    }

    #[tokio::test]
    async fn test_validation_mode_reported() {
        assert_eq!(service().validation_mode(), ValidationMode::SyntaxOnly);
    }
}
