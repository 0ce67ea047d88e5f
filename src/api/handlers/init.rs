//! Handler for store bootstrap.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Creates the database and tables if they are missing.
///
/// # Endpoint
///
/// `GET /init`
///
/// # Response
///
/// `200 OK` with a plain-text summary, e.g.
/// `Database created. Database tables created.` on the first call and
/// `Database already created. Database tables already created.` afterwards.
///
/// # Errors
///
/// Returns 500 if the database server cannot be reached.
pub async fn init_handler(State(state): State<AppState>) -> Result<String, AppError> {
    let report = state.bootstrap_service.bootstrap().await?;

    Ok(report.to_string())
}
