//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{format_money, seat_removal_allowed, Quote, QuoteError};
use super::models::PricingConfig;
use super::requests::QuoteRequest;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub display: String,
}

impl From<Decimal> for MoneyResponse {
    fn from(amount: Decimal) -> Self {
        Self {
            amount,
            display: format_money(amount),
        }
    }
}

/// Surcharge amounts of a priced quote
#[derive(Debug, Serialize)]
pub struct SurchargesResponse {
    pub dirt: MoneyResponse,
    pub seat_removal: MoneyResponse,
    pub pet_hair: MoneyResponse,
}

/// Response for a quote evaluation
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub total: MoneyResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<MoneyResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharges: Option<SurchargesResponse>,
    pub extended_zone: bool,
    /// Whether the seat removal control should be enabled
    pub seat_removal_allowed: bool,
    /// Seat removal flag after normalization
    pub seat_removal: bool,
    pub breakdown: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}

impl QuoteResponse {
    /// Build the response from an evaluated (and therefore normalized) request.
    pub fn new(
        result: &Result<Quote, QuoteError>,
        request: &QuoteRequest,
        whatsapp_url: Option<String>,
    ) -> Self {
        let allowed = seat_removal_allowed(&request.package);
        match result {
            Ok(quote) => Self {
                ok: true,
                error_type: None,
                message: None,
                total: quote.total.into(),
                base: Some(quote.base.into()),
                surcharges: Some(SurchargesResponse {
                    dirt: quote.dirt_surcharge.into(),
                    seat_removal: quote.seat_surcharge.into(),
                    pet_hair: quote.pet_hair_surcharge.into(),
                }),
                extended_zone: quote.extended_zone,
                seat_removal_allowed: allowed,
                seat_removal: request.seat_removal,
                breakdown: quote.breakdown.clone(),
                whatsapp_url,
            },
            Err(err) => Self {
                ok: false,
                error_type: Some(err.kind()),
                message: Some(err.to_string()),
                total: Decimal::ZERO.into(),
                base: None,
                surcharges: None,
                extended_zone: request.extended_zone,
                seat_removal_allowed: allowed,
                seat_removal: request.seat_removal,
                breakdown: vec![err.to_string()],
                whatsapp_url: None,
            },
        }
    }
}

/// One base price entry
#[derive(Debug, Serialize)]
pub struct PriceEntryResponse {
    pub package: &'static str,
    pub vehicle: &'static str,
    pub payment: &'static str,
    pub price: MoneyResponse,
}

/// One surcharge table entry
#[derive(Debug, Serialize)]
pub struct SurchargeEntryResponse {
    pub level: &'static str,
    pub amount: MoneyResponse,
}

/// Response listing the configured price list
#[derive(Debug, Serialize)]
pub struct PriceTableResponse {
    pub prices: Vec<PriceEntryResponse>,
    pub dirt: Vec<SurchargeEntryResponse>,
    pub pet_hair: Vec<SurchargeEntryResponse>,
    pub seat_removal: MoneyResponse,
}

impl From<&PricingConfig> for PriceTableResponse {
    fn from(config: &PricingConfig) -> Self {
        Self {
            prices: config
                .price_entries()
                .map(|((package, vehicle, payment), amount)| PriceEntryResponse {
                    package: package.as_str(),
                    vehicle: vehicle.as_str(),
                    payment: payment.as_str(),
                    price: amount.into(),
                })
                .collect(),
            dirt: config
                .dirt_entries()
                .map(|(level, amount)| SurchargeEntryResponse {
                    level: level.as_str(),
                    amount: amount.into(),
                })
                .collect(),
            pet_hair: config
                .pet_hair_entries()
                .map(|(level, amount)| SurchargeEntryResponse {
                    level: level.as_str(),
                    amount: amount.into(),
                })
                .collect(),
            seat_removal: config.seat_removal_surcharge().into(),
        }
    }
}
