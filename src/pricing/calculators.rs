//! Core quote calculation functions.
//!
//! Pure functions for pricing math - no I/O. A quote is recomputed from
//! scratch on every evaluation of the form.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{
    DirtLevel, PackageTier, PaymentMethod, PetHairLevel, PricingConfig, VehicleClass,
};
use super::requests::QuoteRequest;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use aureon_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Render an amount in whole pesos with es-MX digit grouping.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use aureon_web::pricing::format_money;
///
/// assert_eq!(format_money(dec!(1200)), "$1,200");
/// assert_eq!(format_money(dec!(0)), "$0");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let whole = round_money(amount, 0);
    let digits = whole.abs().normalize().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };
    format!("${}{}", sign, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whether the raw package selection offers seat removal.
pub fn seat_removal_allowed(package: &str) -> bool {
    PackageTier::parse(package).is_some_and(PackageTier::allows_seat_removal)
}

/// Reasons a quote cannot be priced.
///
/// Both are expected states of a half-filled form, not faults; the messages
/// are shown to the customer as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("Selecciona opciones para ver el desglose.")]
    Incomplete { missing: Vec<&'static str> },

    #[error("No hay precio configurado para esta combinación.")]
    NoPriceConfigured {
        package: String,
        vehicle: String,
        payment: String,
    },
}

impl QuoteError {
    /// Stable identifier for logs and the JSON API
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::Incomplete { .. } => "incomplete",
            QuoteError::NoPriceConfigured { .. } => "no_price_configured",
        }
    }

    /// An invalid quote always displays a zero total.
    pub fn total_display(&self) -> String {
        format_money(Decimal::ZERO)
    }
}

/// A priced quote with its itemized breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub package: PackageTier,
    pub vehicle: VehicleClass,
    pub payment: PaymentMethod,
    /// Dirt level as selected; unrecognized values are kept for display
    pub dirt_level: String,
    pub pet_hair: String,
    pub base: Decimal,
    pub dirt_surcharge: Decimal,
    pub seat_surcharge: Decimal,
    pub pet_hair_surcharge: Decimal,
    pub extended_zone: bool,
    pub total: Decimal,
    pub breakdown: Vec<String>,
}

impl Quote {
    pub fn total_display(&self) -> String {
        format_money(self.total)
    }

    pub fn pet_hair_level(&self) -> Option<PetHairLevel> {
        PetHairLevel::parse(&self.pet_hair)
    }
}

/// Price the form selections.
///
/// Normalizes the request first: the seat removal flag is cleared when the
/// package does not offer it. The remaining steps only read the request.
///
/// The extended zone flag is advisory. It never changes the total but adds a
/// breakdown line so the customer knows the cost is confirmed by hand.
pub fn compute_quote(
    config: &PricingConfig,
    request: &mut QuoteRequest,
) -> Result<Quote, QuoteError> {
    request.normalize();

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(QuoteError::Incomplete { missing });
    }

    let no_price = || QuoteError::NoPriceConfigured {
        package: request.package.clone(),
        vehicle: request.vehicle.clone(),
        payment: request.payment.clone(),
    };

    let (package, vehicle, payment) = match (
        PackageTier::parse(&request.package),
        VehicleClass::parse(&request.vehicle),
        PaymentMethod::parse(&request.payment),
    ) {
        (Some(package), Some(vehicle), Some(payment)) => (package, vehicle, payment),
        _ => return Err(no_price()),
    };

    let base = config
        .base_price(package, vehicle, payment)
        .ok_or_else(no_price)?;

    let dirt_level = request.dirt_level.clone();
    let dirt_surcharge = DirtLevel::parse(&dirt_level)
        .map(|level| config.dirt_surcharge(level))
        .unwrap_or(Decimal::ZERO);

    let seat_surcharge = if request.seat_removal && package.allows_seat_removal() {
        config.seat_removal_surcharge()
    } else {
        Decimal::ZERO
    };

    let pet_hair = request.pet_hair_level().to_string();
    let pet_hair_surcharge = PetHairLevel::parse(&pet_hair)
        .map(|level| config.pet_hair_surcharge(level))
        .unwrap_or(Decimal::ZERO);

    let extended_zone = request.extended_zone;
    let total = base + dirt_surcharge + seat_surcharge + pet_hair_surcharge;

    let mut breakdown = vec![format!("Base: {}", format_money(base))];
    if dirt_surcharge > Decimal::ZERO {
        breakdown.push(format!(
            "Suciedad ({}): +{}",
            dirt_level,
            format_money(dirt_surcharge)
        ));
    }
    if seat_surcharge > Decimal::ZERO {
        breakdown.push(format!("Retiro asientos: +{}", format_money(seat_surcharge)));
    }
    if pet_hair_surcharge > Decimal::ZERO {
        breakdown.push(format!(
            "Pelo mascota ({}): +{}",
            pet_hair,
            format_money(pet_hair_surcharge)
        ));
    }
    if extended_zone {
        breakdown.push("Área extendida: se confirma".to_string());
    }

    Ok(Quote {
        package,
        vehicle,
        payment,
        dirt_level,
        pet_hair,
        base,
        dirt_surcharge,
        seat_surcharge,
        pet_hair_surcharge,
        extended_zone,
        total,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(package: &str, vehicle: &str, payment: &str, dirt: &str) -> QuoteRequest {
        QuoteRequest {
            package: package.to_string(),
            vehicle: vehicle.to_string(),
            payment: payment.to_string(),
            dirt_level: dirt.to_string(),
            ..Default::default()
        }
    }

    // ==================== round_money / format_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2));
        assert_eq!(round_money(dec!(3.5), 0), dec!(4));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(dec!(0)), "$0");
        assert_eq!(format_money(dec!(220)), "$220");
        assert_eq!(format_money(dec!(1200)), "$1,200");
        assert_eq!(format_money(dec!(1320)), "$1,320");
        assert_eq!(format_money(dec!(999999)), "$999,999");
        assert_eq!(format_money(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn test_format_money_drops_decimals() {
        assert_eq!(format_money(dec!(1200.00)), "$1,200");
        assert_eq!(format_money(dec!(1599.6)), "$1,600");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(dec!(-1500)), "$-1,500");
        assert_eq!(format_money(dec!(-0.2)), "$0");
    }

    // ==================== eligibility tests ====================

    #[test]
    fn test_seat_removal_allowed() {
        assert!(!seat_removal_allowed("Essential"));
        assert!(seat_removal_allowed("Prime"));
        assert!(seat_removal_allowed("Deluxe"));
        assert!(!seat_removal_allowed(""));
        assert!(!seat_removal_allowed("Platinum"));
    }

    // ==================== compute_quote examples ====================

    #[test]
    fn test_essential_auto_card_base_only() {
        let config = PricingConfig::standard();
        let mut req = request("Essential", "Auto", "Tarjeta", "Base");

        let quote = compute_quote(&config, &mut req).unwrap();

        assert_eq!(quote.total, dec!(220));
        assert_eq!(quote.total_display(), "$220");
        assert_eq!(quote.breakdown, vec!["Base: $220".to_string()]);
    }

    #[test]
    fn test_prime_suburban_cash_with_every_extra() {
        let config = PricingConfig::standard();
        let mut req = request("Prime", "Suburban", "Efectivo", "Alta");
        req.seat_removal = true;
        req.pet_hair = Some("Excesivo".to_string());
        req.extended_zone = true;

        let quote = compute_quote(&config, &mut req).unwrap();

        assert_eq!(quote.base, dec!(720));
        assert_eq!(quote.dirt_surcharge, dec!(300));
        assert_eq!(quote.seat_surcharge, dec!(100));
        assert_eq!(quote.pet_hair_surcharge, dec!(200));
        assert_eq!(quote.total, dec!(1320));
        assert_eq!(quote.total_display(), "$1,320");
        assert_eq!(
            quote.breakdown,
            vec![
                "Base: $720".to_string(),
                "Suciedad (Alta): +$300".to_string(),
                "Retiro asientos: +$100".to_string(),
                "Pelo mascota (Excesivo): +$200".to_string(),
                "Área extendida: se confirma".to_string(),
            ]
        );
    }

    #[test]
    fn test_deluxe_camioneta_card_moderate_extras() {
        let config = PricingConfig::standard();
        let mut req = request("Deluxe", "Camioneta", "Tarjeta", "Media");
        req.seat_removal = true;
        req.pet_hair = Some("Moderado".to_string());

        let quote = compute_quote(&config, &mut req).unwrap();

        assert_eq!(quote.total, dec!(1600));
        assert_eq!(quote.seat_surcharge, dec!(100));
        assert!(req.seat_removal);
        assert!(!quote.extended_zone);
    }

    #[test]
    fn test_missing_vehicle_is_incomplete() {
        let config = PricingConfig::standard();
        let mut req = request("Prime", "", "Tarjeta", "Base");

        let err = compute_quote(&config, &mut req).unwrap_err();

        assert_eq!(
            err,
            QuoteError::Incomplete {
                missing: vec!["vehiculo"]
            }
        );
        assert_eq!(err.total_display(), "$0");
        assert_eq!(err.to_string(), "Selecciona opciones para ver el desglose.");
    }

    // ==================== invariants ====================

    #[test]
    fn test_every_combination_prices_and_sums() {
        let config = PricingConfig::standard();

        for &package in PackageTier::ALL {
            for &vehicle in VehicleClass::ALL {
                for &payment in PaymentMethod::ALL {
                    for &dirt in DirtLevel::ALL {
                        for &pet in PetHairLevel::ALL {
                            let mut req = request(
                                package.as_str(),
                                vehicle.as_str(),
                                payment.as_str(),
                                dirt.as_str(),
                            );
                            req.seat_removal = true;
                            req.pet_hair = Some(pet.as_str().to_string());

                            let quote = compute_quote(&config, &mut req).unwrap();

                            assert!(quote.total >= quote.base);
                            assert_eq!(
                                quote.total,
                                quote.base
                                    + quote.dirt_surcharge
                                    + quote.seat_surcharge
                                    + quote.pet_hair_surcharge
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_essential_never_charges_seat_removal() {
        let config = PricingConfig::standard();
        let mut req = request("Deluxe", "Auto", "Tarjeta", "Base");
        req.seat_removal = true;

        let quote = compute_quote(&config, &mut req).unwrap();
        assert_eq!(quote.seat_surcharge, dec!(100));

        // Customer switches back to Essential with the box still ticked
        req.package = "Essential".to_string();
        let quote = compute_quote(&config, &mut req).unwrap();

        assert_eq!(quote.seat_surcharge, dec!(0));
        assert_eq!(quote.total, dec!(220));
        assert!(!req.seat_removal);
    }

    #[test]
    fn test_each_missing_required_field_is_incomplete() {
        let config = PricingConfig::standard();
        let full = request("Prime", "Auto", "Efectivo", "Media");

        let blank: [fn(&mut QuoteRequest); 4] = [
            |r| r.vehicle.clear(),
            |r| r.package.clear(),
            |r| r.dirt_level.clear(),
            |r| r.payment.clear(),
        ];

        for clear in blank {
            let mut req = full.clone();
            clear(&mut req);
            let err = compute_quote(&config, &mut req).unwrap_err();
            assert_eq!(err.kind(), "incomplete");
        }
    }

    #[test]
    fn test_unknown_selection_is_pricing_gap() {
        let config = PricingConfig::standard();
        let mut req = request("Platinum", "Auto", "Tarjeta", "Base");

        let err = compute_quote(&config, &mut req).unwrap_err();

        assert_eq!(err.kind(), "no_price_configured");
        assert_eq!(
            err.to_string(),
            "No hay precio configurado para esta combinación."
        );
    }

    #[test]
    fn test_whitespace_selection_is_pricing_gap() {
        let config = PricingConfig::standard();
        let mut req = request("Prime", " ", "Tarjeta", "Base");

        let err = compute_quote(&config, &mut req).unwrap_err();
        assert_eq!(err.kind(), "no_price_configured");

        let mut req = request(" Deluxe ", "Auto", "Tarjeta", "Base");
        assert_eq!(
            compute_quote(&config, &mut req).unwrap_err().kind(),
            "no_price_configured"
        );
    }

    #[test]
    fn test_table_miss_is_pricing_gap() {
        let config = PricingConfig::without_prices().with_price(
            (PackageTier::Prime, VehicleClass::Auto, PaymentMethod::Tarjeta),
            dec!(500),
        );

        let mut priced = request("Prime", "Auto", "Tarjeta", "Base");
        assert!(compute_quote(&config, &mut priced).is_ok());

        let mut missing = request("Prime", "Auto", "Efectivo", "Base");
        let err = compute_quote(&config, &mut missing).unwrap_err();
        assert_eq!(
            err,
            QuoteError::NoPriceConfigured {
                package: "Prime".to_string(),
                vehicle: "Auto".to_string(),
                payment: "Efectivo".to_string(),
            }
        );
    }

    #[test]
    fn test_incomplete_and_gap_messages_differ() {
        let incomplete = QuoteError::Incomplete { missing: vec![] };
        let gap = QuoteError::NoPriceConfigured {
            package: String::new(),
            vehicle: String::new(),
            payment: String::new(),
        };
        assert_ne!(incomplete.to_string(), gap.to_string());
        assert_ne!(incomplete.kind(), gap.kind());
    }

    #[test]
    fn test_unrecognized_surcharge_levels_cost_nothing() {
        let config = PricingConfig::standard();
        let mut req = request("Prime", "Auto", "Tarjeta", "Extrema");
        req.pet_hair = Some("Gato".to_string());

        let quote = compute_quote(&config, &mut req).unwrap();

        assert_eq!(quote.dirt_surcharge, dec!(0));
        assert_eq!(quote.pet_hair_surcharge, dec!(0));
        assert_eq!(quote.total, dec!(500));
        assert_eq!(quote.breakdown, vec!["Base: $500".to_string()]);
    }

    #[test]
    fn test_extended_zone_is_not_priced() {
        let config = PricingConfig::standard();
        let mut req = request("Essential", "Suburban", "Efectivo", "Base");
        req.extended_zone = true;

        let quote = compute_quote(&config, &mut req).unwrap();

        assert_eq!(quote.total, dec!(380));
        assert_eq!(
            quote.breakdown,
            vec![
                "Base: $380".to_string(),
                "Área extendida: se confirma".to_string()
            ]
        );
    }

    #[test]
    fn test_compute_quote_is_idempotent() {
        let config = PricingConfig::standard();
        let mut req = request("Deluxe", "Suburban", "Tarjeta", "Alta");
        req.seat_removal = true;
        req.extended_zone = true;
        req.pet_hair = Some("Moderado".to_string());

        let first = compute_quote(&config, &mut req);
        let snapshot = req.clone();
        let second = compute_quote(&config, &mut req);

        assert_eq!(first, second);
        assert_eq!(req, snapshot);
    }
}
