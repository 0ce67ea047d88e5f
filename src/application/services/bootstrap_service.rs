//! Database and schema bootstrap.

use std::sync::Arc;

use crate::domain::entities::BootstrapReport;
use crate::domain::repositories::StoreBootstrap;
use crate::error::AppError;

/// Ensures the backing database and its tables exist.
///
/// Safe to run any number of times; every run after the first reports that
/// everything was already present.
pub struct BootstrapService {
    store: Arc<dyn StoreBootstrap>,
}

impl BootstrapService {
    /// Creates a new bootstrap service.
    pub fn new(store: Arc<dyn StoreBootstrap>) -> Self {
        Self { store }
    }

    /// Creates the database if absent, then the schema.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] or [`AppError::Migration`] if the store
    /// cannot be reached or the schema cannot be applied.
    pub async fn bootstrap(&self) -> Result<BootstrapReport, AppError> {
        let database_created = self.store.ensure_database().await?;
        let tables_created = self.store.ensure_schema().await?;

        let report = BootstrapReport {
            database_created,
            tables_created,
        };
        tracing::info!(database_created, tables_created, "{}", report);

        Ok(report)
    }
}
