//! Hostname resolution for strict URL validation.
//!
//! Provides a [`HostResolver`] trait with one production implementation,
//! [`SystemResolver`].

mod service;
mod system_resolver;

pub use service::{HostResolver, ResolveError};
pub use system_resolver::SystemResolver;

#[cfg(test)]
pub use service::MockHostResolver;
