//! Order summary text sent through the contact channel.

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::pricing::calculators::{AdjustmentKind, PricingResult};

const TERMS: [&str; 3] = [
    "✅ Unlimited free revisions within 14 days",
    "✅ Original work, plagiarism report included",
    "✅ 100% confidential",
];

/// Everything the order message needs
#[derive(Debug, Clone)]
pub struct OrderSummary<'a> {
    pub brand_name: &'a str,
    pub currency_symbol: &'a str,
    pub reference: Uuid,
    pub result: &'a PricingResult,
}

impl OrderSummary<'_> {
    /// Short human reference, e.g. `GW-1A2B3C4D`
    pub fn short_reference(&self) -> String {
        let initials: String = self
            .brand_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .collect::<String>()
            .to_uppercase();
        let id = self.reference.simple().to_string().to_uppercase();
        format!("{}-{}", initials, &id[..8])
    }

    /// Render the chat message
    pub fn render(&self) -> String {
        let result = self.result;
        let input = result.input;
        let sym = self.currency_symbol;

        let mut lines = vec![
            format!("🎓 *{} - ORDER REQUEST*", self.brand_name.to_uppercase()),
            String::new(),
            format!("📚 *Subject:* {}", input.discipline.label()),
            format!("📄 *Pages:* {}", input.pages),
            format!("⏰ *Deadline:* {}", input.urgency.deadline_label()),
            String::new(),
            "💰 *Price Breakdown:*".to_string(),
            format!("• Base rate: {}{}/page", sym, format_amount(result.base_rate)),
        ];

        if result.volume.kind != AdjustmentKind::None {
            lines.push(format!("• {}: {}%", result.volume.kind.label(), result.volume.percent));
        }

        lines.push(format!(
            "• Urgency multiplier: x{}",
            format_amount(result.urgency_multiplier)
        ));
        lines.push(format!("• *Total: {}{}*", sym, result.final_price));
        lines.push(String::new());
        lines.push(format!("🔖 Reference: {}", self.short_reference()));
        lines.push(String::new());
        lines.extend(TERMS.iter().map(|t| t.to_string()));

        lines.join("\n")
    }
}

/// Trim trailing zeros so `1.50` prints as `1.5` and `15.00` as `15`
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{compute_price, Discipline, PolicyPreset, PricingInput, PricingPolicy, Urgency};
    use rust_decimal_macros::dec;

    fn result(preset: PolicyPreset, discipline: Discipline, pages: u32, urgency: Urgency) -> PricingResult {
        compute_price(
            &PricingPolicy::from_preset(preset),
            &PricingInput {
                discipline,
                pages,
                urgency,
            },
        )
    }

    fn summary(result: &PricingResult) -> OrderSummary<'_> {
        OrderSummary {
            brand_name: "Giant Writers",
            currency_symbol: "$",
            reference: Uuid::parse_str("1a2b3c4d-0000-4000-8000-000000000000").unwrap(),
            result,
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(1.50)), "1.5");
        assert_eq!(format_amount(dec!(15.00)), "15");
        assert_eq!(format_amount(dec!(1.25)), "1.25");
    }

    #[test]
    fn test_short_reference() {
        let r = result(PolicyPreset::TieredDiscount, Discipline::Technical, 5, Urgency::Standard1Month);
        assert_eq!(summary(&r).short_reference(), "GW-1A2B3C4D");
    }

    #[test]
    fn test_message_with_discount() {
        let r = result(PolicyPreset::TieredDiscount, Discipline::Technical, 15, Urgency::Rush48h);
        let message = summary(&r).render();

        assert!(message.starts_with("🎓 *GIANT WRITERS - ORDER REQUEST*"));
        assert!(message.contains("📚 *Subject:* Technical (STEM, Engineering, IT, Math)"));
        assert!(message.contains("📄 *Pages:* 15"));
        assert!(message.contains("⏰ *Deadline:* 48 Hours\n"));
        assert!(message.contains("• Base rate: $15/page"));
        assert!(message.contains("• Volume discount: 5%"));
        assert!(message.contains("• Urgency multiplier: x1.5"));
        // 14.25 × 15 × 1.5 = 320.625
        assert!(message.contains("• *Total: $321*"));
        assert!(message.contains("🔖 Reference: GW-1A2B3C4D"));
        assert!(message.ends_with("✅ 100% confidential"));
    }

    #[test]
    fn test_message_without_adjustment_omits_line() {
        let r = result(PolicyPreset::TieredDiscount, Discipline::NonTechnical, 10, Urgency::Standard1Month);
        let message = summary(&r).render();

        assert!(message.contains("Non-Technical (Arts, Business, Literature, History)"));
        assert!(!message.contains("Volume"));
        assert!(message.contains("• *Total: $80*"));
    }

    #[test]
    fn test_message_bonus_wording() {
        let r = result(
            PolicyPreset::TieredDiscountBonusWording,
            Discipline::Technical,
            25,
            Urgency::Priority1Week,
        );
        let message = summary(&r).render();
        assert!(message.contains("• Volume bonus: 10%"));
        assert!(message.contains("⏰ *Deadline:* 1 Week\n"));
    }
}
