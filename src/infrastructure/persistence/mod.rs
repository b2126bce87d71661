//! Registry implementations.
//!
//! # Registries
//!
//! - [`InMemoryRegistry`] - Lock-guarded maps living for the process lifetime

pub mod in_memory_registry;

pub use in_memory_registry::InMemoryRegistry;
