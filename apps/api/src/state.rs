use std::sync::Arc;

use crate::config::Config;
use crate::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<MatchEngine>,
}

impl AppState {
    pub fn new(config: Config, engine: MatchEngine) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
        }
    }
}
