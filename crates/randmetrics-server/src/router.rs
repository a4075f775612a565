use std::sync::Arc;

use axum::{Router, routing::get};
use randmetrics_core::MetricsRegistry;

use crate::handlers;

pub struct AppState {
    pub registry: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<MetricsRegistry>) -> Self {
        Self { registry }
    }
}

pub fn metrics_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metrics", get(handlers::metrics::serve_metrics))
        .with_state(state)
}
