//! View models

pub mod page;

pub use page::{
    nav_items, package_cards, Choice, NavItem, PackageCard, QuoteForm, QuotePanel, Section,
};
