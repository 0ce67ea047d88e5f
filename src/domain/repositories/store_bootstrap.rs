//! Trait for creating the backing database and schema.

use crate::error::AppError;
use async_trait::async_trait;

/// Idempotent store initialisation.
///
/// Both steps may be called any number of times; only the first successful
/// call has an effect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreBootstrap: Send + Sync {
    /// Creates the backing database if it does not exist.
    ///
    /// Returns `true` if this call created it.
    async fn ensure_database(&self) -> Result<bool, AppError>;

    /// Creates the shortcode table if it does not exist.
    ///
    /// Returns `true` if this call created it.
    async fn ensure_schema(&self) -> Result<bool, AppError>;
}
