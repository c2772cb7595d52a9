use std::sync::Arc;

use crate::auth::AuthService;
use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    /// `None` when no API key is configured; analysis then fails with a 500.
    pub llm: Option<Arc<dyn CompletionService>>,
    pub config: Config,
}
