//! Response DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::calculators::PricingResult;
use super::models::{Discipline, Urgency};
use super::policy::{AdjustmentWording, PricingPolicy, VolumeRule};
use super::services::{PricingError, QuoteResult};

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Volume adjustment in a quote
#[derive(Debug, Serialize)]
pub struct VolumeAdjustmentResponse {
    pub kind: &'static str,
    pub label: &'static str,
    pub percent: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub factor: Decimal,
}

/// Response for a price quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub reference: Uuid,
    pub policy: &'static str,
    pub discipline: &'static str,
    pub discipline_label: &'static str,
    pub pages: u32,
    pub pages_clamped: bool,
    pub urgency: &'static str,
    pub urgency_label: &'static str,
    pub base_rate: MoneyResponse,
    pub effective_rate: MoneyResponse,
    pub per_page: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub urgency_multiplier: Decimal,
    pub volume_adjustment: VolumeAdjustmentResponse,
    pub total: MoneyResponse,
    pub final_price: u32,
    pub quoted_at: DateTime<Utc>,
    pub due_by: DateTime<Utc>,
}

impl QuoteResponse {
    pub fn from_quote(quote: &QuoteResult, policy: &PricingPolicy, currency: &str) -> Self {
        let result: &PricingResult = &quote.result;
        let input = result.input;

        Self {
            reference: quote.reference,
            policy: policy.preset.as_str(),
            discipline: input.discipline.as_str(),
            discipline_label: input.discipline.label(),
            pages: input.pages,
            pages_clamped: quote.pages_clamped,
            urgency: input.urgency.as_str(),
            urgency_label: input.urgency.label(),
            base_rate: MoneyResponse::new(result.base_rate, currency),
            effective_rate: MoneyResponse::new(result.effective_rate, currency),
            per_page: MoneyResponse::new(result.per_page, currency),
            urgency_multiplier: result.urgency_multiplier,
            volume_adjustment: VolumeAdjustmentResponse {
                kind: result.volume.kind.as_str(),
                label: result.volume.kind.label(),
                percent: result.volume.percent,
                factor: result.volume.factor,
            },
            total: MoneyResponse::new(Decimal::from(result.final_price), currency),
            final_price: result.final_price,
            quoted_at: quote.quoted_at,
            due_by: quote.due_by,
        }
    }
}

/// Per-discipline rate in the policy response
#[derive(Debug, Serialize)]
pub struct RateResponse {
    pub discipline: &'static str,
    pub label: &'static str,
    pub rate: MoneyResponse,
}

/// Urgency multiplier in the policy response
#[derive(Debug, Serialize)]
pub struct UrgencyMultiplierResponse {
    pub urgency: &'static str,
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
}

/// One volume threshold in the policy response
#[derive(Debug, Serialize)]
pub struct VolumeTierResponse {
    pub above_pages: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub factor: Decimal,
    pub percent: u32,
}

/// Response describing the active pricing policy
#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub policy: &'static str,
    pub wording: &'static str,
    /// "tiered" (factors stack) or "flat" (single threshold)
    pub volume_rule: &'static str,
    pub rates: Vec<RateResponse>,
    pub urgency_multipliers: Vec<UrgencyMultiplierResponse>,
    pub volume_tiers: Vec<VolumeTierResponse>,
    pub min_pages: u32,
    pub max_pages: u32,
}

impl PolicyResponse {
    pub fn from_policy(policy: &PricingPolicy, currency: &str) -> Self {
        let (volume_rule, volume_tiers) = match &policy.volume {
            VolumeRule::Tiered(tiers) => (
                "tiered",
                tiers
                    .iter()
                    .map(|t| VolumeTierResponse {
                        above_pages: t.above,
                        factor: t.factor,
                        percent: t.percent,
                    })
                    .collect(),
            ),
            VolumeRule::Flat { above, factor, percent } => (
                "flat",
                vec![VolumeTierResponse {
                    above_pages: *above,
                    factor: *factor,
                    percent: *percent,
                }],
            ),
        };

        Self {
            policy: policy.preset.as_str(),
            wording: match policy.wording {
                AdjustmentWording::Discount => "discount",
                AdjustmentWording::Bonus => "bonus",
            },
            volume_rule,
            rates: Discipline::ALL
                .iter()
                .map(|d| RateResponse {
                    discipline: d.as_str(),
                    label: d.short_label(),
                    rate: MoneyResponse::new(policy.base_rate(*d), currency),
                })
                .collect(),
            urgency_multipliers: Urgency::ALL
                .iter()
                .map(|u| UrgencyMultiplierResponse {
                    urgency: u.as_str(),
                    label: u.label(),
                    multiplier: policy.urgency_multiplier(*u),
                })
                .collect(),
            volume_tiers,
            min_pages: super::models::MIN_PAGES,
            max_pages: super::models::MAX_PAGES,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&PricingError> for PricingErrorResponse {
    fn from(err: &PricingError) -> Self {
        let details = match err {
            PricingError::InvalidInput { field, value, expected } => Some(serde_json::json!({
                "field": field,
                "value": value,
                "expected": expected,
            })),
        };

        Self {
            error_type: err.error_type().to_string(),
            message: err.to_string(),
            details,
        }
    }
}
