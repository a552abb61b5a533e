#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;
use trove_store::ItemStore;

mod config;
mod handlers;
mod stats_cache;

pub use config::{validate_startup_config, ApiConfig};
pub use stats_cache::StatsCache;

#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
    }

    pub(crate) async fn count(&self, route: &str, status: u16) -> u64 {
        let counts = self.counts.lock().await;
        counts.get(&(route.to_string(), status)).copied().unwrap_or(0)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
    pub stats: Arc<StatsCache>,
    pub api: ApiConfig,
    pub(crate) metrics: Arc<RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ItemStore>, api: ApiConfig) -> Self {
        Self {
            store,
            stats: Arc::new(StatsCache::new()),
            api,
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.api.max_body_bytes;
    Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route(
            "/api/items",
            get(handlers::list_items_handler).post(handlers::create_item_handler),
        )
        .route("/api/items/{id}", get(handlers::item_detail_handler))
        .route("/api/stats", get(handlers::stats_handler))
        .fallback(handlers::not_found_handler)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
