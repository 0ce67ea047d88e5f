//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortcode_service::ShortcodeService`] - Shortening, redirects and statistics
//! - [`services::bootstrap_service::BootstrapService`] - Database and schema creation

pub mod services;
