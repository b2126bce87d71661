//! Domain layer containing the core shortening model.
//!
//! Nothing in here knows about HTTP or about how the registry is stored.
//!
//! # Architecture
//!
//! - [`entities`] - Short codes, canonical URLs, and the record pairing them
//! - [`repositories`] - The [`repositories::Registry`] contract implemented by
//!   the infrastructure layer
//!
//! # Lifecycle
//!
//! A URL/code pair moves once from "absent" to "registered" and stays there
//! for the lifetime of the process. Records are never mutated or removed.

pub mod entities;
pub mod repositories;
