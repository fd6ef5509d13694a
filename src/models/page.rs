//! View models for the landing page

use serde::Serialize;

use crate::pricing::{
    format_money, seat_removal_allowed, DirtLevel, PackageTier, PaymentMethod, PetHairLevel,
    PricingConfig, Quote, QuoteError, QuoteRequest, VehicleClass,
};

/// Page sections in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Hero,
    Fisico,
    Domicilio,
    Cotizador,
    Ejemplos,
    Contacto,
    Footer,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Header,
        Section::Hero,
        Section::Fisico,
        Section::Domicilio,
        Section::Cotizador,
        Section::Ejemplos,
        Section::Contacto,
        Section::Footer,
    ];

    /// Element id of the section on the page
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Header => "inicio",
            Section::Hero => "hero",
            Section::Fisico => "fisico",
            Section::Domicilio => "domicilio",
            Section::Cotizador => "cotizador",
            Section::Ejemplos => "ejemplos",
            Section::Contacto => "contacto",
            Section::Footer => "pie",
        }
    }

    /// Menu label, `None` for sections not linked from the menu
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Section::Fisico => Some("Punto físico"),
            Section::Domicilio => Some("A domicilio"),
            Section::Cotizador => Some("Cotizador"),
            Section::Ejemplos => Some("Resultados"),
            Section::Contacto => Some("Contacto"),
            _ => None,
        }
    }
}

/// Menu entry
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub href: String,
    pub label: &'static str,
}

pub fn nav_items() -> Vec<NavItem> {
    Section::ALL
        .iter()
        .filter_map(|section| {
            section.nav_label().map(|label| NavItem {
                href: format!("#{}", section.anchor()),
                label,
            })
        })
        .collect()
}

/// Price row on a package card
#[derive(Debug, Clone, Serialize)]
pub struct CardPrice {
    pub vehicle: &'static str,
    pub card: String,
    pub cash: String,
}

/// Package card in the at-home section
#[derive(Debug, Clone, Serialize)]
pub struct PackageCard {
    pub tier: &'static str,
    pub tagline: &'static str,
    pub features: Vec<&'static str>,
    pub prices: Vec<CardPrice>,
    pub pick_href: String,
    pub featured: bool,
}

fn package_copy(tier: PackageTier) -> (&'static str, Vec<&'static str>) {
    match tier {
        PackageTier::Essential => (
            "Lavado exterior y aspirado básico",
            vec![
                "Lavado exterior a mano",
                "Aspirado de interiores",
                "Limpieza de vidrios",
                "Llantas y rines",
            ],
        ),
        PackageTier::Prime => (
            "Detallado interior y exterior",
            vec![
                "Todo lo de Essential",
                "Limpieza profunda de tablero y puertas",
                "Lavado de tapetes",
                "Acondicionador de plásticos",
                "Retiro de asientos disponible",
            ],
        ),
        PackageTier::Deluxe => (
            "Detallado completo con protección",
            vec![
                "Todo lo de Prime",
                "Lavado de vestiduras",
                "Encerado de carrocería",
                "Desinfección de cabina",
                "Retiro de asientos disponible",
            ],
        ),
    }
}

/// Cards for every package with their table prices.
///
/// Vehicles missing from the table show `—` instead of a price.
pub fn package_cards(pricing: &PricingConfig) -> Vec<PackageCard> {
    let price = |package, vehicle, payment| {
        pricing
            .base_price(package, vehicle, payment)
            .map(format_money)
            .unwrap_or_else(|| "—".to_string())
    };

    PackageTier::ALL
        .iter()
        .map(|&tier| {
            let (tagline, features) = package_copy(tier);
            PackageCard {
                tier: tier.as_str(),
                tagline,
                features,
                prices: VehicleClass::ALL
                    .iter()
                    .map(|&vehicle| CardPrice {
                        vehicle: vehicle.label(),
                        card: price(tier, vehicle, PaymentMethod::Tarjeta),
                        cash: price(tier, vehicle, PaymentMethod::Efectivo),
                    })
                    .collect(),
                pick_href: format!("/?paquete={}#cotizador", tier.as_str()),
                featured: tier == PackageTier::Prime,
            }
        })
        .collect()
}

/// `<option>` or radio choice
#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

fn choices<T: Copy>(
    all: &[T],
    value: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
    current: &str,
) -> Vec<Choice> {
    all.iter()
        .map(|&item| Choice {
            value: value(item),
            label: label(item),
            selected: value(item) == current,
        })
        .collect()
}

/// Quote total and breakdown as displayed
#[derive(Debug, Clone, Serialize)]
pub struct QuotePanel {
    pub ok: bool,
    pub total: String,
    pub lines: Vec<String>,
}

impl From<&Result<Quote, QuoteError>> for QuotePanel {
    fn from(result: &Result<Quote, QuoteError>) -> Self {
        match result {
            Ok(quote) => Self {
                ok: true,
                total: quote.total_display(),
                lines: quote.breakdown.clone(),
            },
            Err(err) => Self {
                ok: false,
                total: err.total_display(),
                lines: vec![err.to_string()],
            },
        }
    }
}

/// Quote form state reflected back onto the controls
#[derive(Debug, Clone, Serialize)]
pub struct QuoteForm {
    pub vehicles: Vec<Choice>,
    pub packages: Vec<Choice>,
    pub dirt_levels: Vec<Choice>,
    pub payments: Vec<Choice>,
    pub pet_hair: Vec<Choice>,
    pub seat_removal_enabled: bool,
    pub seat_removal_checked: bool,
    pub extended_zone_checked: bool,
    pub zone: String,
    pub note: String,
    pub panel: QuotePanel,
}

impl QuoteForm {
    /// Build from an evaluated request.
    ///
    /// The seat removal control is disabled (and left unchecked by the
    /// engine's normalization) whenever the package does not offer it.
    pub fn new(request: &QuoteRequest, result: &Result<Quote, QuoteError>) -> Self {
        Self {
            vehicles: choices(
                VehicleClass::ALL,
                VehicleClass::as_str,
                VehicleClass::label,
                &request.vehicle,
            ),
            packages: choices(
                PackageTier::ALL,
                PackageTier::as_str,
                PackageTier::label,
                &request.package,
            ),
            dirt_levels: choices(
                DirtLevel::ALL,
                DirtLevel::as_str,
                DirtLevel::label,
                &request.dirt_level,
            ),
            payments: choices(
                PaymentMethod::ALL,
                PaymentMethod::as_str,
                PaymentMethod::label,
                &request.payment,
            ),
            pet_hair: choices(
                PetHairLevel::ALL,
                PetHairLevel::as_str,
                PetHairLevel::label,
                request.pet_hair_level(),
            ),
            seat_removal_enabled: seat_removal_allowed(&request.package),
            seat_removal_checked: request.seat_removal,
            extended_zone_checked: request.extended_zone,
            zone: request.zone.clone(),
            note: request.note.clone(),
            panel: QuotePanel::from(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_quote;

    #[test]
    fn test_nav_items_follow_section_order() {
        let hrefs: Vec<String> = nav_items().into_iter().map(|item| item.href).collect();
        assert_eq!(
            hrefs,
            vec!["#fisico", "#domicilio", "#cotizador", "#ejemplos", "#contacto"]
        );
    }

    #[test]
    fn test_package_cards_show_table_prices() {
        let cards = package_cards(&PricingConfig::standard());
        assert_eq!(cards.len(), 3);

        let deluxe = &cards[2];
        assert_eq!(deluxe.tier, "Deluxe");
        assert_eq!(deluxe.pick_href, "/?paquete=Deluxe#cotizador");
        assert_eq!(deluxe.prices[1].card, "$1,200");
        assert_eq!(deluxe.prices[1].cash, "$1,080");
        assert!(cards[1].featured);
    }

    #[test]
    fn test_package_cards_with_gaps() {
        let cards = package_cards(&PricingConfig::without_prices());
        assert_eq!(cards[0].prices[0].card, "—");
    }

    #[test]
    fn test_form_reflects_seat_rule() {
        let config = PricingConfig::standard();
        let mut request = QuoteRequest {
            package: "Essential".to_string(),
            seat_removal: true,
            ..Default::default()
        };
        let result = compute_quote(&config, &mut request);
        let form = QuoteForm::new(&request, &result);

        assert!(!form.seat_removal_enabled);
        assert!(!form.seat_removal_checked);
        assert!(form.packages[0].selected);
        assert!(!form.panel.ok);
        assert_eq!(form.panel.total, "$0");
    }

    #[test]
    fn test_form_defaults_pet_hair_to_none() {
        let request = QuoteRequest::default();
        let result = compute_quote(&PricingConfig::standard(), &mut request.clone());
        let form = QuoteForm::new(&request, &result);

        let selected: Vec<&str> = form
            .pet_hair
            .iter()
            .filter(|choice| choice.selected)
            .map(|choice| choice.value)
            .collect();
        assert_eq!(selected, vec!["Ninguno"]);
    }

    #[test]
    fn test_panel_for_priced_quote() {
        let mut request = QuoteRequest {
            package: "Prime".to_string(),
            vehicle: "Camioneta".to_string(),
            dirt_level: "Base".to_string(),
            payment: "Tarjeta".to_string(),
            ..Default::default()
        };
        let result = compute_quote(&PricingConfig::standard(), &mut request);
        let panel = QuotePanel::from(&result);

        assert!(panel.ok);
        assert_eq!(panel.total, "$650");
        assert_eq!(panel.lines, vec!["Base: $650".to_string()]);
    }
}
