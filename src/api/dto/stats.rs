//! DTOs for shortcode statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortcodeStats;

/// Redirect statistics for a shortcode.
///
/// Timestamps serialize as RFC 3339. `lastRedirect` is `null` only for records
/// created outside this service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub created: DateTime<Utc>,
    pub last_redirect: Option<DateTime<Utc>>,
    pub redirect_count: i32,
}

impl From<ShortcodeStats> for StatsResponse {
    fn from(stats: ShortcodeStats) -> Self {
        Self {
            created: stats.created,
            last_redirect: stats.redirect_last,
            redirect_count: stats.redirect_count,
        }
    }
}
