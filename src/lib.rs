//! # shorturl
//!
//! A small URL shortening service built with Axum. Long URLs are validated,
//! canonicalized, and assigned sequential integer codes; looking a code up
//! redirects to the stored URL.
//!
//! ## Architecture
//!
//! The crate keeps the layer separation of a larger service:
//!
//! - **Domain Layer** ([`domain`]) - Short codes, canonical URLs, and the registry contract
//! - **Application Layer** ([`application`]) - URL validation and link orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and DNS resolver
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing page
//!
//! ## Behaviour
//!
//! - The same URL (after canonicalization) always receives the same code
//! - Codes start at 1 and are never reused
//! - Nothing is persisted; the registry lives as long as the process
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -d 'url=https://www.example.com' http://localhost:3000/api/shorturl
//! # {"original_url":"https://www.example.com/","short_url":1}
//! curl -i http://localhost:3000/api/shorturl/1
//! # HTTP/1.1 302 Found
//! # location: https://www.example.com/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, UrlValidator, ValidationMode};
    pub use crate::domain::entities::{ShortCode, ShortUrl, ValidUrl};
    pub use crate::domain::repositories::Registry;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryRegistry;
    pub use crate::state::AppState;
}
