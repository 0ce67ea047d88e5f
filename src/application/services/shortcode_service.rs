//! Shortcode creation, redirect resolution and statistics.

use std::sync::Arc;

use crate::domain::entities::{NewShortcode, ShortcodeRecord, ShortcodeStats, StoreSummary};
use crate::domain::repositories::ShortcodeRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::validation::{is_valid_shortcode, is_valid_url};

/// Service for creating shortcodes and tracking their redirects.
pub struct ShortcodeService {
    repository: Arc<dyn ShortcodeRepository>,
}

impl ShortcodeService {
    /// Creates a new shortcode service.
    pub fn new(repository: Arc<dyn ShortcodeRepository>) -> Self {
        Self { repository }
    }

    /// Creates a shortcode for `url`.
    ///
    /// # Order of checks
    ///
    /// 1. `url` must be present and well-formed; nothing else is looked at otherwise.
    /// 2. A missing `shortcode` is replaced by a random one.
    /// 3. A shortcode that already exists is a conflict, whatever its shape.
    /// 4. Only a shortcode that does not exist yet is checked for shape.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingField`] / [`AppError::InvalidUrl`] for a bad `url`
    /// - [`AppError::ShortcodeConflict`] if the shortcode is taken
    /// - [`AppError::InvalidShortcode`] if the shortcode has the wrong shape
    /// - [`AppError::StoreIntegrityViolation`] if a concurrent insert took the
    ///   shortcode between the existence check and the insert
    pub async fn shorten(
        &self,
        url: Option<String>,
        shortcode: Option<String>,
    ) -> Result<ShortcodeRecord, AppError> {
        let url = url.ok_or(AppError::MissingField)?;

        if !is_valid_url(&url) {
            return Err(AppError::InvalidUrl);
        }

        let shortcode = shortcode.unwrap_or_else(generate_code);
        tracing::debug!(%shortcode, "Shortening url");

        if self
            .repository
            .find_by_shortcode(&shortcode)
            .await?
            .is_some()
        {
            return Err(AppError::ShortcodeConflict { shortcode });
        }

        if !is_valid_shortcode(&shortcode) {
            return Err(AppError::InvalidShortcode { shortcode });
        }

        let new_shortcode = NewShortcode {
            url,
            shortcode: shortcode.clone(),
        };

        match self.repository.insert_if_absent(new_shortcode).await? {
            Some(record) => {
                tracing::info!(shortcode = %record.shortcode, "Shortcode created");
                Ok(record)
            }
            None => {
                tracing::warn!(%shortcode, "Shortcode taken by a concurrent insert");
                Err(AppError::StoreIntegrityViolation { shortcode })
            }
        }
    }

    /// Records a redirect and returns the target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is malformed or unknown.
    pub async fn redirect(&self, shortcode: &str) -> Result<String, AppError> {
        if !is_valid_shortcode(shortcode) {
            return Err(not_found(shortcode));
        }

        let record = self
            .repository
            .increment_redirect(shortcode)
            .await?
            .ok_or_else(|| not_found(shortcode))?;

        tracing::debug!(
            shortcode,
            redirect_count = record.redirect_count,
            "Redirect recorded"
        );

        Ok(record.url)
    }

    /// Returns redirect statistics for a shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is malformed or unknown.
    pub async fn stats(&self, shortcode: &str) -> Result<ShortcodeStats, AppError> {
        Ok(self.get(shortcode).await?.stats())
    }

    /// Retrieves a full record by shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode is malformed or unknown.
    pub async fn get(&self, shortcode: &str) -> Result<ShortcodeRecord, AppError> {
        if !is_valid_shortcode(shortcode) {
            return Err(not_found(shortcode));
        }

        self.repository
            .find_by_shortcode(shortcode)
            .await?
            .ok_or_else(|| not_found(shortcode))
    }

    /// Returns totals across all shortcodes.
    pub async fn summary(&self) -> Result<StoreSummary, AppError> {
        self.repository.summary().await
    }
}

fn not_found(shortcode: &str) -> AppError {
    AppError::NotFound {
        shortcode: shortcode.to_string(),
    }
}
