//! Shared handler state.

use std::sync::Arc;

use graph_service_core::{AlgorithmRegistries, Config};

/// State handed to every handler. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registries: AlgorithmRegistries,
}

impl AppState {
    pub fn new(config: Config, registries: AlgorithmRegistries) -> Self {
        Self {
            config: Arc::new(config),
            registries,
        }
    }

    pub fn site_title(&self) -> &str {
        &self.config.site.title
    }
}
