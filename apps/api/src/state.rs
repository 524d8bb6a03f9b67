use std::sync::Arc;

use crate::config::Config;
use crate::mock::HireMateService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backend the handlers call. `MockService` today.
    pub service: Arc<dyn HireMateService>,
    pub config: Config,
}
