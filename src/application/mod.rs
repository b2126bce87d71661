//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating validation and
//! registry calls. Services consume the [`crate::domain::repositories::Registry`]
//! trait and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and code lookup
//! - [`services::url_validator::UrlValidator`] - Syntax and optional DNS validation

pub mod services;
