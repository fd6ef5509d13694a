//! Health endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::cache::CacheStats;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub price_entries: usize,
    pub cache: CacheStats,
    pub checked_at: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        price_entries: state.pricing.price_entries().count(),
        cache: state.cache.stats(),
        checked_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_price_table() {
        let Json(payload) = health(State(AppState::default())).await;

        assert_eq!(payload.status, "ok");
        assert_eq!(payload.service, "aureon-web");
        assert_eq!(payload.price_entries, 18);
    }
}
