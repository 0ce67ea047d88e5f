//! Business logic services for the application layer.

pub mod bootstrap_service;
pub mod shortcode_service;

pub use bootstrap_service::BootstrapService;
pub use shortcode_service::ShortcodeService;
