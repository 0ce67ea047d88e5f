//! API route configuration.

use crate::api::handlers::{init_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET  /init`                - Create database and tables if missing
/// - `POST /shorten`             - Create a shortcode
/// - `GET  /{shortcode}`         - Redirect to the stored URL
/// - `GET  /{shortcode}/stats`   - Redirect statistics
///
/// Static segments win over `/{shortcode}`; neither `init` nor `shorten` is a
/// valid shortcode, so no shortcode is shadowed.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/init", get(init_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{shortcode}", get(redirect_handler))
        .route("/{shortcode}/stats", get(stats_handler))
}
