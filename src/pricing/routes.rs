//! JSON API for quote evaluation.

use axum::{
    extract::State,
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::contact::compose_booking_message;
use crate::AppState;

use super::calculators::compute_quote;
use super::requests::QuoteRequest;
use super::responses::{PriceTableResponse, QuoteResponse};

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/quote", post(quote))
        .route("/table", get(table))
        .layer(cors)
}

/// Evaluate a quote. Invalid selections are a normal `200` with `ok: false`.
async fn quote(
    State(state): State<AppState>,
    Json(mut request): Json<QuoteRequest>,
) -> Json<QuoteResponse> {
    let result = compute_quote(&state.pricing, &mut request);

    let whatsapp_url = match &result {
        Ok(quote) => {
            tracing::debug!(total = %quote.total, "API quote priced");
            let message = compose_booking_message(quote, &request.zone, &request.note);
            Some(state.config.whatsapp_link(&message))
        }
        Err(err) => {
            tracing::debug!(reason = err.kind(), "API quote not priced");
            None
        }
    };

    Json(QuoteResponse::new(&result, &request, whatsapp_url))
}

/// The configured price list
async fn table(State(state): State<AppState>) -> Json<PriceTableResponse> {
    Json(PriceTableResponse::from(state.pricing.as_ref()))
}
