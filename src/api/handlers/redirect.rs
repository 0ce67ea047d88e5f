//! Handler for shortcode redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its URL and records the redirect.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Response
///
/// `302 Found` with the stored URL in the `Location` header. The redirect
/// counter and last-redirect time are updated in the same statement that
/// reads the URL.
///
/// # Errors
///
/// Returns 404 with an empty body if the shortcode is malformed or unknown.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.shortcode_service.redirect(&shortcode).await {
        Ok(url) => match HeaderValue::from_bytes(url.as_bytes()) {
            Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(_) => AppError::Internal(format!(
                "stored url for {} is not a valid header value",
                shortcode
            ))
            .into_response(),
        },
        Err(AppError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => e.into_response(),
    }
}
