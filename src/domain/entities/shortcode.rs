//! Shortcode entity representing a stored URL mapping.

use chrono::{DateTime, Utc};

/// A shortcode mapped to its target URL, with redirect tracking.
///
/// `created` is set once by the store on insertion. `redirect_last` and
/// `redirect_count` are only changed by a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcodeRecord {
    pub id: i64,
    pub url: String,
    pub shortcode: String,
    pub created: DateTime<Utc>,
    pub redirect_last: Option<DateTime<Utc>>,
    pub redirect_count: i32,
}

impl ShortcodeRecord {
    /// Creates a new ShortcodeRecord instance.
    pub fn new(
        id: i64,
        url: String,
        shortcode: String,
        created: DateTime<Utc>,
        redirect_last: Option<DateTime<Utc>>,
        redirect_count: i32,
    ) -> Self {
        Self {
            id,
            url,
            shortcode,
            created,
            redirect_last,
            redirect_count,
        }
    }

    /// Returns the statistics view of this record.
    pub fn stats(&self) -> ShortcodeStats {
        ShortcodeStats {
            created: self.created,
            redirect_last: self.redirect_last,
            redirect_count: self.redirect_count,
        }
    }
}

/// Input data for creating a new record.
///
/// The store stamps `created` and `redirect_last` with the insertion time and
/// starts `redirect_count` at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortcode {
    pub url: String,
    pub shortcode: String,
}

/// Redirect statistics for a single shortcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcodeStats {
    pub created: DateTime<Utc>,
    pub redirect_last: Option<DateTime<Utc>>,
    pub redirect_count: i32,
}

/// Totals across every stored shortcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSummary {
    pub shortcodes: i64,
    pub redirects: i64,
}
