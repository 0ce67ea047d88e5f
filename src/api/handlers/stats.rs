//! Handler for shortcode statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns redirect statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /{shortcode}/stats`
///
/// # Response
///
/// ```json
/// {
///   "created": "2024-01-02T03:04:05.123456Z",
///   "lastRedirect": "2024-01-03T10:00:00.000001Z",
///   "redirectCount": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 404 `{"shortcode": ..., "error_message": "Shortcode not found"}`
/// if the shortcode is malformed or unknown.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.shortcode_service.stats(&shortcode).await?;

    Ok(Json(stats.into()))
}
