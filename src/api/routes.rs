//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None of them require authentication.
///
/// # Endpoints
///
/// - `POST /shorturl`      - Shorten a URL (form or JSON body)
/// - `GET  /shorturl/{id}` - Redirect to the URL registered under `id`
/// - `GET  /hello`         - Fixed greeting
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{id}", get(redirect_handler))
        .route("/hello", get(hello_handler))
}
