//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`ShortCode`] - Positive integer identifier handed out by the registry
//! - [`ValidUrl`] - Canonical absolute HTTP(S) URL produced by validation
//! - [`ShortUrl`] - A registered code/URL pair

pub mod short_url;

pub use short_url::{ShortCode, ShortUrl, ValidUrl};
