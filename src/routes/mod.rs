//! Page routes

pub mod health;
pub mod home;
pub mod quote;

use axum::{routing::get, Router};

use crate::error::AppError;
use crate::AppState;

/// Site routes (pages and health)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/cotizar", get(quote::evaluate).post(quote::submit))
        .route("/health", get(health::health))
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
