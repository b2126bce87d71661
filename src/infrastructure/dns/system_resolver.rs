//! Resolver backed by the operating system's name service.

use super::service::{HostResolver, ResolveError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Resolves hostnames with [`tokio::net::lookup_host`].
///
/// Every lookup is capped by `timeout` so a slow upstream resolver cannot
/// hold a request open indefinitely.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    /// Creates a resolver that gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<(), ResolveError> {
        // Port is irrelevant; lookup_host needs one to build socket addresses.
        let lookup = tokio::net::lookup_host((host, 0));

        let mut addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| ResolveError::Timeout(self.timeout))??;

        match addrs.next() {
            Some(addr) => {
                debug!("Resolved {} to {}", host, addr.ip());
                Ok(())
            }
            None => Err(ResolveError::NoAddresses),
        }
    }
}
