//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so handlers and services never depend on a
//! specific store technology.
//!
//! # Available Repositories
//!
//! - [`ShortcodeRepository`] - Atomic shortcode insert, lookup and redirect tracking
//! - [`StoreBootstrap`] - Idempotent creation of the database and schema
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod shortcode_repository;
pub mod store_bootstrap;

pub use shortcode_repository::ShortcodeRepository;
pub use store_bootstrap::StoreBootstrap;

#[cfg(test)]
pub use shortcode_repository::MockShortcodeRepository;
#[cfg(test)]
pub use store_bootstrap::MockStoreBootstrap;
