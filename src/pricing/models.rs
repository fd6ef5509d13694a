//! Service catalog and pricing configuration for the quote engine.
//!
//! Every selectable value on the quote form maps onto one of the enumerations
//! below. `PricingConfig` holds the price table and surcharge tables; it is
//! built once at startup and shared read-only.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Declares a form-selectable catalog enum.
///
/// Each variant carries the form value it is submitted as and the label shown
/// to customers. Parsing is exact on the trimmed value and never fails loudly:
/// unknown values yield `None` so callers pick their own fallback.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All variants in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value used by form controls and the JSON API
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Customer-facing label
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

catalog_enum! {
    /// Service level
    pub enum PackageTier {
        Essential => ("Essential", "Essential"),
        Prime => ("Prime", "Prime"),
        Deluxe => ("Deluxe", "Deluxe"),
    }
}

catalog_enum! {
    /// Size category of the serviced vehicle
    pub enum VehicleClass {
        Auto => ("Auto", "Auto"),
        Camioneta => ("Camioneta", "Camioneta / SUV mediana"),
        Suburban => ("Suburban", "Suburban / SUV grande"),
    }
}

catalog_enum! {
    pub enum PaymentMethod {
        Tarjeta => ("Tarjeta", "Tarjeta"),
        Efectivo => ("Efectivo", "Efectivo"),
    }
}

catalog_enum! {
    /// How dirty the vehicle is; drives a fixed surcharge
    pub enum DirtLevel {
        Base => ("Base", "Base (uso normal)"),
        Media => ("Media", "Media (+$150)"),
        Alta => ("Alta", "Alta (+$300)"),
    }
}

catalog_enum! {
    /// Amount of pet hair in the cabin; no selection means `Ninguno`
    pub enum PetHairLevel {
        Ninguno => ("Ninguno", "Ninguno"),
        Moderado => ("Moderado", "Moderado (+$150)"),
        Excesivo => ("Excesivo", "Excesivo (+$200)"),
    }
}

impl PackageTier {
    /// Seat removal is only offered on the upper tiers.
    pub fn allows_seat_removal(self) -> bool {
        matches!(self, PackageTier::Prime | PackageTier::Deluxe)
    }
}

impl Default for PetHairLevel {
    fn default() -> Self {
        PetHairLevel::Ninguno
    }
}

/// At-home prices as (package, vehicle, card, cash).
const HOME_SERVICE_PRICES: [(PackageTier, VehicleClass, i64, i64); 9] = [
    (PackageTier::Essential, VehicleClass::Auto, 220, 200),
    (PackageTier::Essential, VehicleClass::Camioneta, 320, 290),
    (PackageTier::Essential, VehicleClass::Suburban, 420, 380),
    (PackageTier::Prime, VehicleClass::Auto, 500, 450),
    (PackageTier::Prime, VehicleClass::Camioneta, 650, 585),
    (PackageTier::Prime, VehicleClass::Suburban, 800, 720),
    (PackageTier::Deluxe, VehicleClass::Auto, 1000, 900),
    (PackageTier::Deluxe, VehicleClass::Camioneta, 1200, 1080),
    (PackageTier::Deluxe, VehicleClass::Suburban, 1400, 1260),
];

const DIRT_SURCHARGES: [(DirtLevel, i64); 3] = [
    (DirtLevel::Base, 0),
    (DirtLevel::Media, 150),
    (DirtLevel::Alta, 300),
];

const PET_HAIR_SURCHARGES: [(PetHairLevel, i64); 3] = [
    (PetHairLevel::Ninguno, 0),
    (PetHairLevel::Moderado, 150),
    (PetHairLevel::Excesivo, 200),
];

const SEAT_REMOVAL_SURCHARGE: i64 = 100;

/// Key of a base price entry
pub type PriceKey = (PackageTier, VehicleClass, PaymentMethod);

/// Immutable price and surcharge tables consumed by the quote engine
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    prices: BTreeMap<PriceKey, Decimal>,
    dirt: BTreeMap<DirtLevel, Decimal>,
    pet_hair: BTreeMap<PetHairLevel, Decimal>,
    seat_removal: Decimal,
}

impl PricingConfig {
    /// The published at-home price list.
    pub fn standard() -> Self {
        let mut prices = BTreeMap::new();
        for (package, vehicle, card, cash) in HOME_SERVICE_PRICES {
            prices.insert((package, vehicle, PaymentMethod::Tarjeta), Decimal::from(card));
            prices.insert((package, vehicle, PaymentMethod::Efectivo), Decimal::from(cash));
        }

        Self {
            prices,
            ..Self::without_prices()
        }
    }

    /// Standard surcharges with an empty price table.
    ///
    /// Combine with [`PricingConfig::with_price`] to build partial tables.
    pub fn without_prices() -> Self {
        Self {
            prices: BTreeMap::new(),
            dirt: DIRT_SURCHARGES
                .iter()
                .map(|&(level, amount)| (level, Decimal::from(amount)))
                .collect(),
            pet_hair: PET_HAIR_SURCHARGES
                .iter()
                .map(|&(level, amount)| (level, Decimal::from(amount)))
                .collect(),
            seat_removal: Decimal::from(SEAT_REMOVAL_SURCHARGE),
        }
    }

    pub fn with_price(mut self, key: PriceKey, amount: Decimal) -> Self {
        self.prices.insert(key, amount);
        self
    }

    /// Look up a base price. `None` means the combination is not configured.
    pub fn base_price(
        &self,
        package: PackageTier,
        vehicle: VehicleClass,
        payment: PaymentMethod,
    ) -> Option<Decimal> {
        self.prices.get(&(package, vehicle, payment)).copied()
    }

    /// Dirt surcharge, zero when the level has no entry.
    pub fn dirt_surcharge(&self, level: DirtLevel) -> Decimal {
        self.dirt.get(&level).copied().unwrap_or(Decimal::ZERO)
    }

    /// Pet hair surcharge, zero when the level has no entry.
    pub fn pet_hair_surcharge(&self, level: PetHairLevel) -> Decimal {
        self.pet_hair.get(&level).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn seat_removal_surcharge(&self) -> Decimal {
        self.seat_removal
    }

    /// All configured base prices in table order
    pub fn price_entries(&self) -> impl Iterator<Item = (PriceKey, Decimal)> + '_ {
        self.prices.iter().map(|(key, amount)| (*key, *amount))
    }

    pub fn dirt_entries(&self) -> impl Iterator<Item = (DirtLevel, Decimal)> + '_ {
        self.dirt.iter().map(|(level, amount)| (*level, *amount))
    }

    pub fn pet_hair_entries(&self) -> impl Iterator<Item = (PetHairLevel, Decimal)> + '_ {
        self.pet_hair.iter().map(|(level, amount)| (*level, *amount))
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::standard()
    }
}
