//! Utility functions shared across layers.
//!
//! - [`url_normalizer`] - URL parsing and canonicalization

pub mod url_normalizer;
