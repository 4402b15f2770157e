//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no hidden state. All arithmetic
//! is exact decimal, so tier factors like 0.95 never drift the way binary
//! floats do before rounding.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{Discipline, PricingInput, Urgency};
use super::policy::{AdjustmentWording, PricingPolicy, VolumeRule};

/// Round to specified decimal places, halves away from zero.
///
/// All calculator amounts are positive, so this is plain "round half up".
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use giantwriters_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(112.5), 0), dec!(113));
/// assert_eq!(round_money(dec!(213.75), 0), dec!(214));
/// assert_eq!(round_money(dec!(14.2666), 2), dec!(14.27));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Direction of the volume adjustment as shown to the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    None,
    Discount,
    Bonus,
}

impl AdjustmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentKind::None => "none",
            AdjustmentKind::Discount => "discount",
            AdjustmentKind::Bonus => "bonus",
        }
    }

    /// Breakdown label, e.g. "Volume discount"
    pub fn label(&self) -> &'static str {
        match self {
            AdjustmentKind::None => "Volume adjustment",
            AdjustmentKind::Discount => "Volume discount",
            AdjustmentKind::Bonus => "Volume bonus",
        }
    }
}

/// Volume adjustment for a page count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeAdjustment {
    pub kind: AdjustmentKind,
    /// Product of every applied multiplier
    pub factor: Decimal,
    /// Headline percent of the highest tier crossed
    pub percent: u32,
}

impl VolumeAdjustment {
    fn none() -> Self {
        Self {
            kind: AdjustmentKind::None,
            factor: Decimal::ONE,
            percent: 0,
        }
    }
}

/// Work out the volume adjustment for `pages` under `policy`.
///
/// Tier thresholds are strict: exactly 10 pages gets nothing from the
/// "above 10" tier.
pub fn volume_adjustment(policy: &PricingPolicy, pages: u32) -> VolumeAdjustment {
    let mut adjustment = VolumeAdjustment::none();

    match &policy.volume {
        VolumeRule::Tiered(tiers) => {
            for tier in tiers.iter().filter(|t| pages > t.above) {
                adjustment.factor *= tier.factor;
                adjustment.percent = tier.percent;
            }
        }
        VolumeRule::Flat { above, factor, percent } => {
            if pages > *above {
                adjustment.factor = *factor;
                adjustment.percent = *percent;
            }
        }
    }

    if adjustment.percent > 0 {
        adjustment.kind = match policy.wording {
            AdjustmentWording::Discount => AdjustmentKind::Discount,
            AdjustmentWording::Bonus => AdjustmentKind::Bonus,
        };
    }

    adjustment
}

/// Full breakdown of a computed price
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    pub input: PricingInput,
    pub base_rate: Decimal,
    /// Base rate after the volume factor, before urgency
    pub effective_rate: Decimal,
    pub urgency_multiplier: Decimal,
    pub volume: VolumeAdjustment,
    pub final_price: u32,
    /// `final_price / pages`, two decimal places
    pub per_page: Decimal,
}

/// Compute the price and its breakdown.
///
/// `price = round(base_rate × volume_factor × pages × urgency_multiplier)`
///
/// Pages outside the slider range are clamped before pricing.
pub fn compute_price(policy: &PricingPolicy, input: &PricingInput) -> PricingResult {
    let input = &PricingInput::new(input.discipline, i64::from(input.pages), input.urgency);
    let base_rate = policy.base_rate(input.discipline);
    let urgency_multiplier = policy.urgency_multiplier(input.urgency);
    let volume = volume_adjustment(policy, input.pages);

    let effective_rate = base_rate * volume.factor;
    let pages = Decimal::from(input.pages);
    let total = round_money(effective_rate * pages * urgency_multiplier, 0);
    let final_price = saturate_price(total);
    let per_page = round_money(total / pages, 2);

    PricingResult {
        input: *input,
        base_rate,
        effective_rate,
        urgency_multiplier,
        volume,
        final_price,
        per_page,
    }
}

/// Whole-unit total as `u32`, saturating at the type's bounds
fn saturate_price(total: Decimal) -> u32 {
    if total.is_sign_negative() {
        return 0;
    }
    total.to_u32().unwrap_or(u32::MAX)
}

/// Final price only. `pages` is clamped into `[1, 50]`.
pub fn compute(policy: &PricingPolicy, discipline: Discipline, pages: u32, urgency: Urgency) -> u32 {
    let input = PricingInput::new(discipline, i64::from(pages), urgency);
    compute_price(policy, &input).final_price
}
