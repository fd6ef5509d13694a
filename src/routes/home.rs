//! Landing page handler

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Datelike;
use serde::Deserialize;
use std::sync::Arc;

use crate::cache::AppCache;
use crate::error::Result;
use crate::models::{nav_items, package_cards, NavItem, PackageCard, QuoteForm};
use crate::pricing::{compute_quote, PackageTier, Quote, QuoteError, QuoteRequest};
use crate::AppState;

/// Query parameters for the landing page
#[derive(Debug, Deserialize)]
pub struct LandingQuery {
    /// Package pre-selected by an "Elegir paquete" button
    #[serde(default)]
    pub paquete: Option<String>,
}

/// Single-page layout assembled from the section fragments
#[derive(Template)]
#[template(path = "index.html")]
struct LandingTemplate {
    site_name: String,
    year: i32,
    whatsapp_link: String,
    maps_link: String,
    nav: Vec<NavItem>,
    packages: Vec<PackageCard>,
    form: QuoteForm,
    has_alert: bool,
    alert: String,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Landing page
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LandingQuery>,
) -> Result<Html<String>> {
    // Unknown packages are ignored rather than rejected
    let package = query.paquete.as_deref().and_then(PackageTier::parse);
    let html = render_landing(&state, package).await?;
    Ok(Html(html.as_ref().clone()))
}

/// Render the landing page without form input, using the cache.
pub async fn render_landing(state: &AppState, package: Option<PackageTier>) -> Result<Arc<String>> {
    let key = AppCache::landing_key(package, current_year());

    if let Some(cached) = state.cache.pages.get(&key).await {
        tracing::debug!("Cache HIT for landing page: {}", key);
        return Ok(cached);
    }
    tracing::debug!("Cache MISS for landing page: {}", key);

    let mut request = QuoteRequest {
        package: package.map(|tier| tier.as_str().to_string()).unwrap_or_default(),
        ..Default::default()
    };
    let result = compute_quote(&state.pricing, &mut request);

    let html = Arc::new(render_page(state, &request, &result, None)?);
    state.cache.pages.insert(key, html.clone()).await;
    Ok(html)
}

/// Render the full page for an evaluated quote request.
pub fn render_page(
    state: &AppState,
    request: &QuoteRequest,
    result: &std::result::Result<Quote, QuoteError>,
    alert: Option<&str>,
) -> Result<String> {
    let template = LandingTemplate {
        site_name: state.config.site_name.clone(),
        year: current_year(),
        whatsapp_link: state.config.general_whatsapp_link(),
        maps_link: state.config.maps_link(),
        nav: nav_items(),
        packages: package_cards(&state.pricing),
        form: QuoteForm::new(request, result),
        has_alert: alert.is_some(),
        alert: alert.unwrap_or_default().to_string(),
    };

    Ok(template.render()?)
}
