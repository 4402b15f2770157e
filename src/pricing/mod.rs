//! Pricing engine module for the landing page calculator.
//!
//! Maps `(discipline, pages, urgency)` to a whole-number price under the
//! configured policy, and exposes it over HTTP/JSON.

pub mod calculators;
pub mod models;
pub mod policy;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{compute, compute_price, round_money, AdjustmentKind, PricingResult};
pub use models::{Discipline, PricingInput, Urgency, MAX_PAGES, MIN_PAGES};
pub use policy::{PolicyPreset, PricingPolicy};
pub use routes::router;
pub use services::{PriceEngine, PricingError, QuoteResult};
