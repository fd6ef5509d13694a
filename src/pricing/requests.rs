//! Request DTOs for the quote form and pricing API.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use super::calculators::seat_removal_allowed;
use super::models::PetHairLevel;

/// Quote form selections as submitted.
///
/// Field names follow the form controls on the page. Selections stay raw
/// strings; an empty value means the customer has not chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default, rename = "vehiculo")]
    pub vehicle: String,
    #[serde(default, rename = "paquete")]
    pub package: String,
    #[serde(default, rename = "suciedad")]
    pub dirt_level: String,
    #[serde(default, rename = "pago")]
    pub payment: String,
    #[serde(default, rename = "extraAsientos", deserialize_with = "deserialize_flag")]
    pub seat_removal: bool,
    #[serde(default, rename = "peloMascota")]
    pub pet_hair: Option<String>,
    #[serde(default, rename = "extraZona", deserialize_with = "deserialize_flag")]
    pub extended_zone: bool,
    #[serde(default, rename = "zona")]
    pub zone: String,
    #[serde(default, rename = "nota")]
    pub note: String,
}

impl QuoteRequest {
    /// Clear the seat removal flag when the selected package does not offer it.
    ///
    /// Applying this twice is the same as applying it once.
    pub fn normalize(&mut self) {
        if !seat_removal_allowed(&self.package) {
            self.seat_removal = false;
        }
    }

    /// Form controls that are required but still empty, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("vehiculo", &self.vehicle),
            ("paquete", &self.package),
            ("suciedad", &self.dirt_level),
            ("pago", &self.payment),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Selected pet hair level, `Ninguno` when nothing was picked.
    pub fn pet_hair_level(&self) -> &str {
        self.pet_hair
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(PetHairLevel::Ninguno.as_str())
    }
}

/// Accept checkbox values from HTML forms (`on`, `true`, `1`) as well as
/// JSON booleans. Anything else reads as unchecked.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or a checkbox value")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            Ok(matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "on" | "true" | "1" | "yes"
            ))
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
            deserializer.deserialize_any(FlagVisitor)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
