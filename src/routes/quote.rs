//! Quote form handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::contact::compose_booking_message;
use crate::error::Result;
use crate::pricing::{compute_quote, QuoteRequest};
use crate::AppState;

use super::home::render_page;

/// Shown when the customer submits before choosing the required options
pub const SUBMIT_ALERT: &str = "Completa vehículo, paquete, suciedad y método de pago.";

/// Re-evaluate the form and render the page with the updated quote
pub async fn evaluate(
    State(state): State<AppState>,
    Query(mut request): Query<QuoteRequest>,
) -> Result<Html<String>> {
    let result = compute_quote(&state.pricing, &mut request);
    if let Err(err) = &result {
        tracing::debug!(reason = err.kind(), "Quote not priced yet");
    }

    Ok(Html(render_page(&state, &request, &result, None)?))
}

/// Submit the form: send the customer to WhatsApp with the booking message.
///
/// An unpriced quote never produces a link; the page comes back with an alert.
pub async fn submit(
    State(state): State<AppState>,
    Form(mut request): Form<QuoteRequest>,
) -> Result<Response> {
    match compute_quote(&state.pricing, &mut request) {
        Ok(quote) => {
            let message = compose_booking_message(&quote, &request.zone, &request.note);
            tracing::info!(
                package = %quote.package,
                vehicle = %quote.vehicle,
                payment = %quote.payment,
                total = %quote.total,
                extended_zone = quote.extended_zone,
                "Quote submitted"
            );
            Ok(Redirect::to(&state.config.whatsapp_link(&message)).into_response())
        }
        Err(err) => {
            tracing::warn!(reason = err.kind(), "Quote submission blocked: {}", err);
            let result = Err(err);
            let html = render_page(&state, &request, &result, Some(SUBMIT_ALERT))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}
