//! Process-local implementation of the repository traits.
//!
//! Backs the HTTP handler tests. Nothing survives a restart.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{NewShortcode, ShortcodeRecord, StoreSummary};
use crate::domain::repositories::{ShortcodeRepository, StoreBootstrap};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, ShortcodeRecord>,
    last_id: i64,
}

/// In-memory shortcode store.
///
/// A single mutex guards all records, which makes every trait method atomic.
#[derive(Debug, Default)]
pub struct InMemoryShortcodeRepository {
    inner: Mutex<Inner>,
    database_ready: AtomicBool,
    schema_ready: AtomicBool,
}

impl InMemoryShortcodeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ShortcodeRepository for InMemoryShortcodeRepository {
    async fn insert_if_absent(
        &self,
        new_shortcode: NewShortcode,
    ) -> Result<Option<ShortcodeRecord>, AppError> {
        let mut inner = self.lock();

        if inner.records.contains_key(&new_shortcode.shortcode) {
            return Ok(None);
        }

        inner.last_id += 1;
        let now = Utc::now();
        let record = ShortcodeRecord::new(
            inner.last_id,
            new_shortcode.url,
            new_shortcode.shortcode,
            now,
            Some(now),
            0,
        );
        inner
            .records
            .insert(record.shortcode.clone(), record.clone());

        Ok(Some(record))
    }

    async fn find_by_shortcode(
        &self,
        shortcode: &str,
    ) -> Result<Option<ShortcodeRecord>, AppError> {
        Ok(self.lock().records.get(shortcode).cloned())
    }

    async fn increment_redirect(
        &self,
        shortcode: &str,
    ) -> Result<Option<ShortcodeRecord>, AppError> {
        let mut inner = self.lock();

        Ok(inner.records.get_mut(shortcode).map(|record| {
            record.redirect_count += 1;
            record.redirect_last = Some(Utc::now());
            record.clone()
        }))
    }

    async fn summary(&self) -> Result<StoreSummary, AppError> {
        let inner = self.lock();

        Ok(StoreSummary {
            shortcodes: inner.records.len() as i64,
            redirects: inner
                .records
                .values()
                .map(|r| i64::from(r.redirect_count))
                .sum(),
        })
    }
}

#[async_trait]
impl StoreBootstrap for InMemoryShortcodeRepository {
    async fn ensure_database(&self) -> Result<bool, AppError> {
        Ok(!self.database_ready.swap(true, Ordering::SeqCst))
    }

    async fn ensure_schema(&self) -> Result<bool, AppError> {
        Ok(!self.schema_ready.swap(true, Ordering::SeqCst))
    }
}
