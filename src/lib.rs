pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod site;

use std::sync::Arc;
use config::Config;
use site::RouteRegistry;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<RouteRegistry>,
}

impl AppState {
    pub fn new(config: Config, registry: RouteRegistry) -> Self {
        AppState {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }
}
