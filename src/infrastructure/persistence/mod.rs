//! Repository implementations.
//!
//! PostgreSQL implementations use SQLx with bound parameters. The in-memory
//! implementation backs the handler tests.
//!
//! # Repositories
//!
//! - [`PgShortcodeRepository`] - Shortcode storage and redirect tracking
//! - [`PgStoreBootstrap`] - Database creation and schema migrations
//! - [`InMemoryShortcodeRepository`] - Process-local store implementing both traits

pub mod memory_shortcode_repository;
pub mod pg_shortcode_repository;
pub mod pg_store_bootstrap;

pub use memory_shortcode_repository::InMemoryShortcodeRepository;
pub use pg_shortcode_repository::PgShortcodeRepository;
pub use pg_store_bootstrap::{MIGRATOR, PgStoreBootstrap};
