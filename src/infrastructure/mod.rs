//! Infrastructure layer for process-local state and external lookups.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution used by strict URL validation
//! - [`persistence`] - In-memory registry implementation

pub mod dns;
pub mod persistence;
