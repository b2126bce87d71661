//! Storage contracts for the domain layer.
//!
//! Implementations live in [`crate::infrastructure::persistence`].

pub mod registry;

pub use registry::{Registry, RegistryError};

#[cfg(test)]
pub use registry::MockRegistry;
