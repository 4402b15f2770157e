//! Pricing policies.
//!
//! Three rate tables have been used on the landing page over time. Each one is
//! available as a [`PolicyPreset`]; the active preset is picked in configuration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

use super::models::{Discipline, Urgency};

/// Named policy presets selectable via `PRICING_POLICY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyPreset {
    /// 15/8 per page, stacked volume discounts above 10, 20 and 30 pages
    TieredDiscount,
    /// Same numbers as `TieredDiscount`, adjustment worded as a bonus
    TieredDiscountBonusWording,
    /// 25/20 per page, single ×1.1 volume bonus above 10 pages
    FlatBonus,
}

impl PolicyPreset {
    pub const ALL: [PolicyPreset; 3] = [
        PolicyPreset::TieredDiscount,
        PolicyPreset::TieredDiscountBonusWording,
        PolicyPreset::FlatBonus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyPreset::TieredDiscount => "tiered-discount",
            PolicyPreset::TieredDiscountBonusWording => "tiered-discount-bonus-wording",
            PolicyPreset::FlatBonus => "flat-bonus",
        }
    }
}

impl Default for PolicyPreset {
    fn default() -> Self {
        PolicyPreset::TieredDiscount
    }
}

impl fmt::Display for PolicyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tiered-discount" => Ok(PolicyPreset::TieredDiscount),
            "tiered-discount-bonus-wording" => Ok(PolicyPreset::TieredDiscountBonusWording),
            "flat-bonus" => Ok(PolicyPreset::FlatBonus),
            other => Err(format!(
                "unknown pricing policy '{}' (expected tiered-discount, tiered-discount-bonus-wording or flat-bonus)",
                other
            )),
        }
    }
}

/// How the volume adjustment is named to the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentWording {
    Discount,
    Bonus,
}

/// One threshold of a stacked volume discount
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeTier {
    /// Tier applies when pages is strictly greater than this
    pub above: u32,
    pub factor: Decimal,
    /// Headline percentage shown to customers
    pub percent: u32,
}

/// Page-count-dependent adjustment
#[derive(Debug, Clone, PartialEq)]
pub enum VolumeRule {
    /// Every crossed tier multiplies the per-page rate. Tiers are ordered by `above`.
    Tiered(Vec<VolumeTier>),
    /// A single multiplier on the total once pages exceed `above`.
    Flat {
        above: u32,
        factor: Decimal,
        percent: u32,
    },
}

/// Rate table, urgency multipliers and volume rule
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    pub preset: PolicyPreset,
    pub technical_rate: Decimal,
    pub non_technical_rate: Decimal,
    pub rush_multiplier: Decimal,
    pub priority_multiplier: Decimal,
    pub standard_multiplier: Decimal,
    pub volume: VolumeRule,
    pub wording: AdjustmentWording,
}

impl PricingPolicy {
    pub fn from_preset(preset: PolicyPreset) -> Self {
        match preset {
            PolicyPreset::TieredDiscount => Self::tiered_discount(),
            PolicyPreset::TieredDiscountBonusWording => Self {
                preset,
                wording: AdjustmentWording::Bonus,
                ..Self::tiered_discount()
            },
            PolicyPreset::FlatBonus => Self::flat_bonus(),
        }
    }

    fn tiered_discount() -> Self {
        Self {
            preset: PolicyPreset::TieredDiscount,
            technical_rate: dec!(15),
            non_technical_rate: dec!(8),
            rush_multiplier: dec!(1.5),
            priority_multiplier: dec!(1.25),
            standard_multiplier: dec!(1),
            volume: VolumeRule::Tiered(vec![
                VolumeTier { above: 10, factor: dec!(0.95), percent: 5 },
                VolumeTier { above: 20, factor: dec!(0.90), percent: 10 },
                VolumeTier { above: 30, factor: dec!(0.85), percent: 15 },
            ]),
            wording: AdjustmentWording::Discount,
        }
    }

    fn flat_bonus() -> Self {
        Self {
            preset: PolicyPreset::FlatBonus,
            technical_rate: dec!(25),
            non_technical_rate: dec!(20),
            rush_multiplier: dec!(1.5),
            priority_multiplier: dec!(1.25),
            standard_multiplier: dec!(1),
            volume: VolumeRule::Flat {
                above: 10,
                factor: dec!(1.1),
                percent: 10,
            },
            wording: AdjustmentWording::Bonus,
        }
    }

    /// Per-page rate before any adjustment
    pub fn base_rate(&self, discipline: Discipline) -> Decimal {
        match discipline {
            Discipline::Technical => self.technical_rate,
            Discipline::NonTechnical => self.non_technical_rate,
        }
    }

    pub fn urgency_multiplier(&self, urgency: Urgency) -> Decimal {
        match urgency {
            Urgency::Rush48h => self.rush_multiplier,
            Urgency::Priority1Week => self.priority_multiplier,
            Urgency::Standard1Month => self.standard_multiplier,
        }
    }

    /// Page counts at which the price curve may change slope or drop
    pub fn tier_boundaries(&self) -> Vec<u32> {
        match &self.volume {
            VolumeRule::Tiered(tiers) => tiers.iter().map(|t| t.above).collect(),
            VolumeRule::Flat { above, .. } => vec![*above],
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::from_preset(PolicyPreset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!("tiered-discount".parse::<PolicyPreset>().unwrap(), PolicyPreset::TieredDiscount);
        assert_eq!(
            "Tiered-Discount-Bonus-Wording".parse::<PolicyPreset>().unwrap(),
            PolicyPreset::TieredDiscountBonusWording
        );
        assert_eq!("flat-bonus".parse::<PolicyPreset>().unwrap(), PolicyPreset::FlatBonus);
        assert!("cheapest".parse::<PolicyPreset>().unwrap_err().contains("cheapest"));
    }

    #[test]
    fn test_preset_as_str_parses_back() {
        for preset in PolicyPreset::ALL {
            assert_eq!(preset.as_str().parse::<PolicyPreset>().unwrap(), preset);
            assert_eq!(PricingPolicy::from_preset(preset).preset, preset);
        }
    }

    #[test]
    fn test_tiered_discount_rates() {
        let policy = PricingPolicy::from_preset(PolicyPreset::TieredDiscount);
        assert_eq!(policy.base_rate(Discipline::Technical), dec!(15));
        assert_eq!(policy.base_rate(Discipline::NonTechnical), dec!(8));
        assert_eq!(policy.urgency_multiplier(Urgency::Rush48h), dec!(1.5));
        assert_eq!(policy.urgency_multiplier(Urgency::Priority1Week), dec!(1.25));
        assert_eq!(policy.urgency_multiplier(Urgency::Standard1Month), dec!(1));
        assert_eq!(policy.wording, AdjustmentWording::Discount);
        assert_eq!(policy.tier_boundaries(), vec![10, 20, 30]);
    }

    #[test]
    fn test_bonus_wording_differs_only_in_wording() {
        let a = PricingPolicy::from_preset(PolicyPreset::TieredDiscount);
        let b = PricingPolicy::from_preset(PolicyPreset::TieredDiscountBonusWording);
        assert_eq!(b.wording, AdjustmentWording::Bonus);
        assert_eq!(a.technical_rate, b.technical_rate);
        assert_eq!(a.non_technical_rate, b.non_technical_rate);
        assert_eq!(a.volume, b.volume);
    }

    #[test]
    fn test_flat_bonus_rates() {
        let policy = PricingPolicy::from_preset(PolicyPreset::FlatBonus);
        assert_eq!(policy.base_rate(Discipline::Technical), dec!(25));
        assert_eq!(policy.base_rate(Discipline::NonTechnical), dec!(20));
        assert_eq!(policy.urgency_multiplier(Urgency::Rush48h), dec!(1.5));
        assert_eq!(policy.tier_boundaries(), vec![10]);
    }

    #[test]
    fn test_default_policy_is_tiered_discount() {
        assert_eq!(PricingPolicy::default().preset, PolicyPreset::TieredDiscount);
    }
}
