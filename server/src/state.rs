//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no records of its own, so it only carries immutable config.

use std::sync::Arc;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}
