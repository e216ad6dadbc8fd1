use crate::config::Config;
use crate::registry::RouteRegistry;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: &'static RouteRegistry,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            registry: RouteRegistry::global(),
            config: Arc::new(config),
        }
    }
}
