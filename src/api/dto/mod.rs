//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for (de)serialization; request bodies are also checked
//! with `validator` before they reach the service layer.

pub mod health;
pub mod hello;
pub mod shorten;
