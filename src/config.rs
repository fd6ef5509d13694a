//! Site configuration
//!
//! Read once at startup from the environment (a `.env` file is honoured by
//! the binary) and shared read-only afterwards.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::contact;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "525639005947";
/// 18°53'29.1"N 99°03'55.2"W
pub const DEFAULT_LAT: f64 = 18.8914167;
pub const DEFAULT_LNG: f64 = -99.0653333;
pub const DEFAULT_BASE_MESSAGE: &str =
    "Hola, vengo de la página de AureOn. Quiero información y disponibilidad.";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is invalid ({value:?}): {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Static site settings
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_name: String,
    /// Recipient of WhatsApp deep links, international format without `+`
    pub whatsapp_number: String,
    pub physical_lat: f64,
    pub physical_lng: f64,
    /// Greeting used by general contact buttons
    pub base_message: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl SiteConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset or blank variables fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let whatsapp_number = get("AUREON_WHATSAPP_NUMBER")
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| DEFAULT_WHATSAPP_NUMBER.to_string());

        let physical_lat = match get("AUREON_LAT") {
            Some(raw) => parse_coordinate("AUREON_LAT", &raw, 90.0)?,
            None => DEFAULT_LAT,
        };
        let physical_lng = match get("AUREON_LNG") {
            Some(raw) => parse_coordinate("AUREON_LNG", &raw, 180.0)?,
            None => DEFAULT_LNG,
        };

        let bind_raw = get("AUREON_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "AUREON_BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let config = Self {
            site_name: get("AUREON_SITE_NAME").unwrap_or_else(|| "AureOn".to_string()),
            whatsapp_number,
            physical_lat,
            physical_lng,
            base_message: get("AUREON_BASE_MESSAGE")
                .unwrap_or_else(|| DEFAULT_BASE_MESSAGE.to_string()),
            bind_addr,
            static_dir: get("AUREON_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.whatsapp_number;
        if number.len() < 8 || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid {
                var: "AUREON_WHATSAPP_NUMBER",
                value: number.clone(),
                reason: "expected international format digits only, without '+' or spaces"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// WhatsApp deep link to the business with `message` pre-filled
    pub fn whatsapp_link(&self, message: &str) -> String {
        contact::whatsapp_link(&self.whatsapp_number, message)
    }

    /// WhatsApp link used by every general contact button
    pub fn general_whatsapp_link(&self) -> String {
        self.whatsapp_link(&self.base_message)
    }

    pub fn maps_link(&self) -> String {
        contact::maps_link(self.physical_lat, self.physical_lng)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "AureOn".to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            physical_lat: DEFAULT_LAT,
            physical_lng: DEFAULT_LNG,
            base_message: DEFAULT_BASE_MESSAGE.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

fn parse_coordinate(var: &'static str, raw: &str, limit: f64) -> Result<f64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason,
    };
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(e.to_string()))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(invalid(format!("must be within ±{}", limit)));
    }
    Ok(value)
}
