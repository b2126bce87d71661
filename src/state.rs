//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, UrlValidator};
use crate::infrastructure::persistence::InMemoryRegistry;

/// Link service backed by the process-local registry.
pub type AppLinkService = LinkService<InMemoryRegistry>;

/// Application state cloned into each request.
///
/// The registry is created once at startup and reached only through
/// [`AppState::link_service`]; there is no global store.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>) -> Self {
        Self { link_service }
    }

    /// Builds state around a fresh, empty registry.
    pub fn with_validator(validator: UrlValidator) -> Self {
        let registry = Arc::new(InMemoryRegistry::new());
        Self::new(Arc::new(LinkService::new(registry, validator)))
    }
}
