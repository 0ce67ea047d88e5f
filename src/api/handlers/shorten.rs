//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortcode for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "shortcode": "asd148" }
/// ```
///
/// `shortcode` is optional; a random one is generated when it is omitted.
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// { "shortcode": "asd148", "error_message": "" }
/// ```
///
/// # Errors
///
/// All failures keep the same body shape with a non-empty `error_message`:
///
/// - 400 if the body is malformed, `url` is missing or `url` is invalid
/// - 409 if the shortcode is already in use
/// - 412 if the shortcode is not six characters of `[A-Za-z0-9_]`
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) =
        payload.map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

    let record = state
        .shortcode_service
        .shorten(payload.url, payload.shortcode)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::created(record.shortcode)),
    ))
}
