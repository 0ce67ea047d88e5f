//! PostgreSQL implementation of the shortcode repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewShortcode, ShortcodeRecord, StoreSummary};
use crate::domain::repositories::ShortcodeRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_shortcode;

#[derive(FromRow)]
struct ShortcodeRow {
    id: i64,
    url: String,
    shortcode: String,
    created: DateTime<Utc>,
    redirect_last: Option<DateTime<Utc>>,
    redirect_count: i32,
}

impl From<ShortcodeRow> for ShortcodeRecord {
    fn from(r: ShortcodeRow) -> Self {
        ShortcodeRecord::new(
            r.id,
            r.url,
            r.shortcode,
            r.created,
            r.redirect_last,
            r.redirect_count,
        )
    }
}

/// PostgreSQL repository for the `shortcode` table.
///
/// Each call checks a connection out of the pool and returns it when the query
/// completes or fails.
pub struct PgShortcodeRepository {
    pool: Arc<PgPool>,
}

impl PgShortcodeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortcodeRepository for PgShortcodeRepository {
    async fn insert_if_absent(
        &self,
        new_shortcode: NewShortcode,
    ) -> Result<Option<ShortcodeRecord>, AppError> {
        let result = sqlx::query_as::<_, ShortcodeRow>(
            r#"
            INSERT INTO shortcode (url, shortcode, created, redirect_last, redirect_count)
            VALUES ($1, $2, now(), now(), 0)
            ON CONFLICT (shortcode) DO NOTHING
            RETURNING id, url, shortcode, created, redirect_last, redirect_count
            "#,
        )
        .bind(&new_shortcode.url)
        .bind(&new_shortcode.shortcode)
        .fetch_optional(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.map(ShortcodeRecord::from)),
            Err(e) if is_unique_violation_on_shortcode(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_shortcode(
        &self,
        shortcode: &str,
    ) -> Result<Option<ShortcodeRecord>, AppError> {
        let row = sqlx::query_as::<_, ShortcodeRow>(
            r#"
            SELECT id, url, shortcode, created, redirect_last, redirect_count
            FROM shortcode
            WHERE shortcode = $1
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortcodeRecord::from))
    }

    async fn increment_redirect(
        &self,
        shortcode: &str,
    ) -> Result<Option<ShortcodeRecord>, AppError> {
        let row = sqlx::query_as::<_, ShortcodeRow>(
            r#"
            UPDATE shortcode
            SET redirect_count = redirect_count + 1,
                redirect_last = now()
            WHERE shortcode = $1
            RETURNING id, url, shortcode, created, redirect_last, redirect_count
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortcodeRecord::from))
    }

    async fn summary(&self) -> Result<StoreSummary, AppError> {
        let (shortcodes, redirects) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COUNT(*), COALESCE(SUM(redirect_count), 0)::BIGINT
            FROM shortcode
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(StoreSummary {
            shortcodes,
            redirects,
        })
    }
}
