//! In-memory caching using moka
//!
//! Only the plain landing page (no form state) is cached. Quote evaluations
//! always render fresh.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::pricing::PackageTier;
use crate::routes::home;
use crate::AppState;

/// Application cache holding rendered pages
#[derive(Clone)]
pub struct AppCache {
    /// Landing pages (landing_key -> HTML)
    pub pages: Cache<String, Arc<String>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // One entry per package pre-selection and year: 30 min TTL, 10 min idle
            pages: Cache::builder()
                .max_capacity(16)
                .time_to_live(Duration::from_secs(30 * 60))
                .time_to_idle(Duration::from_secs(10 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            pages_size: self.pages.entry_count(),
        }
    }

    /// Generate cache key for a landing page render
    pub fn landing_key(package: Option<PackageTier>, year: i32) -> String {
        match package {
            Some(tier) => format!("landing:{}:{}", tier, year),
            None => format!("landing:none:{}", year),
        }
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub pages_size: u64,
}

/// Start background cache warmer
///
/// Renders every landing variant on startup and refreshes every 10 minutes.
pub async fn start_cache_warmer(state: AppState) {
    let mut interval = interval(Duration::from_secs(10 * 60));
    loop {
        interval.tick().await;
        warm_cache(&state).await;
    }
}

/// Warm the cache with every landing page variant
async fn warm_cache(state: &AppState) {
    info!("Starting cache warm-up...");

    let variants = std::iter::once(None).chain(PackageTier::ALL.iter().copied().map(Some));
    for package in variants {
        if let Err(e) = home::render_landing(state, package).await {
            warn!("Failed to warm landing page {:?}: {}", package, e);
        }
    }

    info!("Cache warm-up complete. Stats: {:?}", state.cache.stats());
}
