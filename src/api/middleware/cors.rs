//! CORS middleware.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method and header. Preflight requests get `200 OK`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
