//! Repository trait for shortcode data access.

use crate::domain::entities::{NewShortcode, ShortcodeRecord, StoreSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortcode records.
///
/// Every method is a single atomic operation against the store; callers never
/// read-modify-write a record themselves.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortcodeRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortcodeRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortcodeRepository: Send + Sync {
    /// Inserts a record unless the shortcode is already taken.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if the record was inserted
    /// - `Ok(None)` if the unique constraint rejected the shortcode
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    async fn insert_if_absent(
        &self,
        new_shortcode: NewShortcode,
    ) -> Result<Option<ShortcodeRecord>, AppError>;

    /// Finds a record by its shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    async fn find_by_shortcode(&self, shortcode: &str)
    -> Result<Option<ShortcodeRecord>, AppError>;

    /// Increments the redirect counter and stamps `redirect_last` with the
    /// current time in one atomic update.
    ///
    /// Returns the updated record, or `Ok(None)` if no record matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    async fn increment_redirect(
        &self,
        shortcode: &str,
    ) -> Result<Option<ShortcodeRecord>, AppError>;

    /// Counts records and total redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on store errors.
    async fn summary(&self) -> Result<StoreSummary, AppError>;
}
