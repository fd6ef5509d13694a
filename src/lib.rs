//! AureOn website: single-page layout, contact links and the at-home quote
//! engine.

pub mod cache;
pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::cache::AppCache;
use crate::config::SiteConfig;
use crate::pricing::PricingConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub pricing: Arc<PricingConfig>,
    pub cache: AppCache,
}

impl AppState {
    pub fn new(config: SiteConfig, pricing: PricingConfig) -> Self {
        Self {
            config: Arc::new(config),
            pricing: Arc::new(pricing),
            cache: AppCache::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SiteConfig::default(), PricingConfig::standard())
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(routes::router())
        .nest("/api/pricing", pricing::router())
        .nest_service("/static", static_files)
        .fallback(routes::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
