use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state passed to all route handlers.
///
/// Configuration is read-only after startup; the HTTP client is shared so
/// its connection pool is reused across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
