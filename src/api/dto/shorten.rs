//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// Both fields are optional at the parsing level so that a missing `url` is
/// reported with its own message rather than as a malformed body.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten.
    pub url: Option<String>,

    /// Optional six-character shortcode; generated when absent.
    pub shortcode: Option<String>,
}

/// Response for a successful shortening.
///
/// Failures use the same shape via [`crate::error::ErrorBody`].
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortcode: String,
    pub error_message: String,
}

impl ShortenResponse {
    pub fn created(shortcode: String) -> Self {
        Self {
            shortcode,
            error_message: String::new(),
        }
    }
}
