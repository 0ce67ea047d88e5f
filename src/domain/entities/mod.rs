//! Core domain entities.
//!
//! - [`ShortcodeRecord`] - A stored shortcode to URL mapping with redirect counters
//! - [`NewShortcode`] - Input for creating a record
//! - [`ShortcodeStats`] - The statistics view of a record
//! - [`StoreSummary`] - Totals across all records
//! - [`BootstrapReport`] - What a bootstrap run created

pub mod bootstrap;
pub mod shortcode;

pub use bootstrap::BootstrapReport;
pub use shortcode::{NewShortcode, ShortcodeRecord, ShortcodeStats, StoreSummary};
