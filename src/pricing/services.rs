//! Pricing service: the engine handed to handlers plus request validation.
//!
//! `PriceEngine` wraps the active [`PricingPolicy`] behind an `Arc` so it can
//! be cloned into every request cheaply. Parsing and validation of untrusted
//! requests live here.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use super::calculators::{self, PricingResult};
use super::models::{clamp_pages, Discipline, PricingInput, Urgency};
use super::policy::PricingPolicy;
use super::requests::QuoteRequest;

/// Pricing calculation error types
#[derive(Debug, Clone)]
pub enum PricingError {
    InvalidInput {
        field: String,
        value: String,
        expected: String,
    },
}

impl PricingError {
    /// Machine-readable error type for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::InvalidInput { .. } => "invalid_input",
        }
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidInput { field, value, expected } => {
                write!(
                    f,
                    "Invalid {} '{}' (expected one of: {})",
                    field, value, expected
                )
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// A validated quote with its reference and dates
#[derive(Debug, Clone)]
pub struct QuoteResult {
    pub reference: Uuid,
    pub result: PricingResult,
    /// True when the requested page count was outside the slider range
    pub pages_clamped: bool,
    pub requested_pages: i64,
    pub quoted_at: DateTime<Utc>,
    pub due_by: DateTime<Utc>,
}

/// The price engine used by every handler
#[derive(Debug, Clone)]
pub struct PriceEngine {
    policy: Arc<PricingPolicy>,
}

impl PriceEngine {
    pub fn new(policy: PricingPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Final price for a triple; `pages` is clamped into the slider range
    pub fn compute(&self, discipline: Discipline, pages: u32, urgency: Urgency) -> u32 {
        calculators::compute(&self.policy, discipline, pages, urgency)
    }

    /// Full breakdown for an input
    pub fn price(&self, input: &PricingInput) -> PricingResult {
        calculators::compute_price(&self.policy, input)
    }

    /// Validate an untrusted request and quote it.
    ///
    /// Page counts are clamped into the slider range; unknown discipline or
    /// urgency values are rejected.
    pub fn quote(&self, request: &QuoteRequest) -> Result<QuoteResult, PricingError> {
        let (input, pages_clamped) = parse_request(request)?;
        let result = self.price(&input);

        let quoted_at = Utc::now();
        let due_by = quoted_at + input.urgency.turnaround();

        tracing::debug!(
            policy = %self.policy.preset,
            discipline = %input.discipline,
            pages = input.pages,
            urgency = %input.urgency,
            final_price = result.final_price,
            "Quote computed"
        );

        Ok(QuoteResult {
            reference: Uuid::new_v4(),
            result,
            pages_clamped,
            requested_pages: request.pages,
            quoted_at,
            due_by,
        })
    }
}

impl Default for PriceEngine {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}

/// Turn a raw request into a calculator input.
///
/// Returns the input and whether `pages` had to be clamped.
pub fn parse_request(request: &QuoteRequest) -> Result<(PricingInput, bool), PricingError> {
    let discipline: Discipline = request.discipline.parse()?;
    let urgency: Urgency = request.urgency.parse()?;
    let pages = clamp_pages(request.pages);
    let pages_clamped = i64::from(pages) != request.pages;

    if pages_clamped {
        tracing::warn!(requested = request.pages, clamped = pages, "Page count clamped");
    }

    Ok((
        PricingInput {
            discipline,
            pages,
            urgency,
        },
        pages_clamped,
    ))
}
