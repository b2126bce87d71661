//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Per-request spans and latency logging
//! - [`cors`] - Cross-origin access for browser clients

pub mod cors;
pub mod tracing;
