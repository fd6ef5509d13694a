//! Quote engine for the at-home detailing packages.
//!
//! Pure pricing over an immutable price table, plus the JSON API that exposes
//! it to the page.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{
    compute_quote, format_money, round_money, seat_removal_allowed, Quote, QuoteError,
};
pub use models::{
    DirtLevel, PackageTier, PaymentMethod, PetHairLevel, PricingConfig, VehicleClass,
};
pub use requests::QuoteRequest;
pub use routes::router;
