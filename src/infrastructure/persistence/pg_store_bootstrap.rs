//! PostgreSQL database and schema bootstrap.

use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::{Connection, PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::repositories::StoreBootstrap;
use crate::error::AppError;
use crate::utils::db_error::is_duplicate_database;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Creates the target database through a maintenance database on the same
/// server, then applies [`MIGRATOR`] to the target.
pub struct PgStoreBootstrap {
    pool: Arc<PgPool>,
    maintenance_url: String,
    database_name: String,
}

impl PgStoreBootstrap {
    /// Creates a bootstrapper.
    ///
    /// - `pool` - pool for the target database; may be lazy, since the
    ///   database might not exist yet
    /// - `maintenance_url` - connection string of an always-present database
    ///   (usually `postgres`) on the same server
    /// - `database_name` - name of the target database
    pub fn new(pool: Arc<PgPool>, maintenance_url: String, database_name: String) -> Self {
        Self {
            pool,
            maintenance_url,
            database_name,
        }
    }
}

#[async_trait]
impl StoreBootstrap for PgStoreBootstrap {
    async fn ensure_database(&self) -> Result<bool, AppError> {
        let mut conn = PgConnection::connect(&self.maintenance_url).await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
                .bind(&self.database_name)
                .fetch_one(&mut conn)
                .await?;

        let created = if exists {
            false
        } else {
            // CREATE DATABASE takes no bind parameters.
            let statement = format!(
                "CREATE DATABASE {}",
                quote_identifier(&self.database_name)
            );

            match sqlx::query(&statement).execute(&mut conn).await {
                Ok(_) => {
                    tracing::info!(database = %self.database_name, "Database created");
                    true
                }
                Err(e) if is_duplicate_database(&e) => false,
                Err(e) => return Err(e.into()),
            }
        };

        conn.close().await?;

        Ok(created)
    }

    async fn ensure_schema(&self) -> Result<bool, AppError> {
        let existed: bool =
            sqlx::query_scalar("SELECT to_regclass('public.shortcode') IS NOT NULL")
                .fetch_one(self.pool.as_ref())
                .await?;

        MIGRATOR.run(self.pool.as_ref()).await?;

        Ok(!existed)
    }
}

/// Quotes a PostgreSQL identifier, doubling embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
