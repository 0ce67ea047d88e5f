//! Error taxonomy shared by services, repositories and handlers.
//!
//! Every failure the service can report maps to exactly one HTTP status and a
//! response body of the form `{"shortcode": ..., "error_message": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Placeholder reported in the `shortcode` field when no shortcode applies.
pub const NO_SHORTCODE: &str = "n/a";

/// Response body for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub shortcode: String,
    pub error_message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request body did not carry a `url` field.
    #[error("Url not present")]
    MissingField,

    #[error("Invalid url")]
    InvalidUrl,

    /// The body could not be parsed as a shorten request.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("The provided shortcode is invalid")]
    InvalidShortcode { shortcode: String },

    #[error("Shortcode already in use")]
    ShortcodeConflict { shortcode: String },

    /// The store rejected an insert on the unique shortcode column after the
    /// existence check passed (a concurrent request won the race).
    #[error("Shortcode already in use")]
    StoreIntegrityViolation { shortcode: String },

    #[error("Shortcode not found")]
    NotFound { shortcode: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField | AppError::InvalidUrl | AppError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidShortcode { .. } => StatusCode::PRECONDITION_FAILED,
            AppError::ShortcodeConflict { .. } | AppError::StoreIntegrityViolation { .. } => {
                StatusCode::CONFLICT
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Migration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The shortcode this error refers to, if any.
    pub fn shortcode(&self) -> Option<&str> {
        match self {
            AppError::InvalidShortcode { shortcode }
            | AppError::ShortcodeConflict { shortcode }
            | AppError::StoreIntegrityViolation { shortcode }
            | AppError::NotFound { shortcode } => Some(shortcode),
            _ => None,
        }
    }

    /// Message exposed to clients. Store internals are never leaked.
    pub fn error_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Migration(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
            AppError::MalformedBody(_) => "Malformed request body".to_string(),
            other => other.to_string(),
        }
    }

    /// Returns true for errors caused by the server rather than the request.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            shortcode: self.shortcode().unwrap_or(NO_SHORTCODE).to_string(),
            error_message: self.error_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::MissingField.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidUrl.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidShortcode {
                shortcode: "a".to_string()
            }
            .status_code(),
            StatusCode::PRECONDITION_FAILED
        );
        assert_eq!(
            AppError::ShortcodeConflict {
                shortcode: "asd148".to_string()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::StoreIntegrityViolation {
                shortcode: "asd148".to_string()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound {
                shortcode: "asd148".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AppError::MissingField.error_message(), "Url not present");
        assert_eq!(AppError::InvalidUrl.error_message(), "Invalid url");
        assert_eq!(
            AppError::MalformedBody("EOF while parsing".to_string()).error_message(),
            "Malformed request body"
        );
        assert_eq!(
            AppError::InvalidShortcode {
                shortcode: "a".to_string()
            }
            .error_message(),
            "The provided shortcode is invalid"
        );
        assert_eq!(
            AppError::StoreIntegrityViolation {
                shortcode: "asd148".to_string()
            }
            .error_message(),
            "Shortcode already in use"
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Internal("connection refused".to_string());
        assert_eq!(err.error_message(), "Internal server error");
        assert!(err.to_string().contains("connection refused"));
        assert!(err.shortcode().is_none());
    }
}
