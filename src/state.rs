//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{BootstrapService, ShortcodeService};

/// Services shared by all handlers.
///
/// Built once at startup and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub shortcode_service: Arc<ShortcodeService>,
    pub bootstrap_service: Arc<BootstrapService>,
}

impl AppState {
    pub fn new(
        shortcode_service: Arc<ShortcodeService>,
        bootstrap_service: Arc<BootstrapService>,
    ) -> Self {
        Self {
            shortcode_service,
            bootstrap_service,
        }
    }
}
