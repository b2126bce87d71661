//! Process-local implementation of [`Registry`].

use crate::domain::entities::{ShortCode, ShortUrl, ValidUrl};
use crate::domain::repositories::{Registry, RegistryError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// In-memory registry guarded by a single lock.
///
/// Both lookup maps and the code counter sit behind one [`RwLock`]:
/// `submit` holds the write guard across its check-then-insert so two
/// requests for the same URL cannot each allocate a code. Lookups share
/// the read guard.
///
/// State lives exactly as long as the value; nothing is persisted.
pub struct InMemoryRegistry {
    inner: RwLock<Inner>,
}

struct Inner {
    by_url: HashMap<ValidUrl, ShortCode>,
    by_code: HashMap<ShortCode, ShortUrl>,
    /// `None` once the code space is used up.
    next_code: Option<ShortCode>,
}

impl InMemoryRegistry {
    /// Creates an empty registry whose first code is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                by_url: HashMap::new(),
                by_code: HashMap::new(),
                next_code: Some(ShortCode::FIRST),
            }),
        }
    }

    #[cfg(test)]
    fn starting_at(code: ShortCode) -> Self {
        let registry = Self::new();
        registry.write().next_code = Some(code);
        registry
    }

    // Writers never leave the maps half-updated, so a poisoned guard is still
    // consistent and safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Registry for InMemoryRegistry {
    async fn submit(&self, url: ValidUrl) -> Result<ShortUrl, RegistryError> {
        let mut inner = self.write();

        if let Some(code) = inner.by_url.get(&url).copied()
            && let Some(existing) = inner.by_code.get(&code)
        {
            debug!(code = %code, url = %url, "URL already registered");
            metrics::counter!("shorturl_reused_total").increment(1);
            return Ok(existing.clone());
        }

        let code = inner.next_code.ok_or(RegistryError::Exhausted)?;
        inner.next_code = code.next();

        let record = ShortUrl::new(code, url.clone());
        inner.by_url.insert(url, code);
        inner.by_code.insert(code, record.clone());

        info!(code = %code, url = %record.original_url, "Registered new short URL");
        metrics::counter!("shorturl_created_total").increment(1);

        Ok(record)
    }

    async fn resolve(&self, code: ShortCode) -> Option<ShortUrl> {
        self.read().by_code.get(&code).cloned()
    }

    async fn count(&self) -> usize {
        self.read().by_code.len()
    }
}
