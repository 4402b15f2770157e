//! Calculator state: the one input/result tuple behind the widget.
//!
//! Every input change goes through [`CalculatorState::update`], which
//! recomputes the whole result from the current triple. Nothing is patched
//! incrementally. Each recompute also opens a short animation window used
//! only for visual feedback; a new change before it closes pushes it out.

use std::time::{Duration, Instant};

use crate::pricing::calculators::PricingResult;
use crate::pricing::models::{clamp_pages, Discipline, PricingInput, Urgency};
use crate::pricing::services::PriceEngine;

/// How long the result panel pulses after a change
pub const ANIMATION_WINDOW: Duration = Duration::from_millis(300);

/// A single control change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChange {
    Discipline(Discipline),
    /// Raw slider value; clamped into the page range
    Pages(i64),
    Urgency(Urgency),
}

impl InputChange {
    fn apply_to(self, input: PricingInput) -> PricingInput {
        match self {
            InputChange::Discipline(discipline) => PricingInput { discipline, ..input },
            InputChange::Pages(pages) => PricingInput {
                pages: clamp_pages(pages),
                ..input
            },
            InputChange::Urgency(urgency) => PricingInput { urgency, ..input },
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalculatorState {
    engine: PriceEngine,
    input: PricingInput,
    result: PricingResult,
    animating_until: Option<Instant>,
}

impl CalculatorState {
    /// Calculator at the default input
    pub fn new(engine: PriceEngine) -> Self {
        Self::with_input(engine, PricingInput::default())
    }

    pub fn with_input(engine: PriceEngine, input: PricingInput) -> Self {
        let result = engine.price(&input);
        Self {
            engine,
            input,
            result,
            animating_until: None,
        }
    }

    pub fn input(&self) -> &PricingInput {
        &self.input
    }

    pub fn result(&self) -> &PricingResult {
        &self.result
    }

    pub fn final_price(&self) -> u32 {
        self.result.final_price
    }

    /// Apply a change now
    pub fn update(&mut self, change: InputChange) -> bool {
        self.update_at(change, Instant::now())
    }

    /// Apply a change observed at `now`.
    ///
    /// Returns whether the input actually changed. An unchanged value does
    /// not recompute or restart the animation.
    pub fn update_at(&mut self, change: InputChange, now: Instant) -> bool {
        let next = change.apply_to(self.input);
        if next == self.input {
            return false;
        }

        self.input = next;
        self.recompute_at(now);
        true
    }

    /// Apply several changes now, recomputing once
    pub fn apply_all(&mut self, changes: &[InputChange]) -> bool {
        self.apply_all_at(changes, Instant::now())
    }

    /// Apply several changes observed at `now`, recomputing once
    pub fn apply_all_at(&mut self, changes: &[InputChange], now: Instant) -> bool {
        let before = self.input;
        for change in changes {
            self.input = change.apply_to(self.input);
        }

        if self.input == before {
            return false;
        }
        self.recompute_at(now);
        true
    }

    /// Recompute the result from the current input
    pub fn recompute_at(&mut self, now: Instant) {
        self.result = self.engine.price(&self.input);
        self.animating_until = Some(now + ANIMATION_WINDOW);
        tracing::trace!(final_price = self.result.final_price, "Calculator recomputed");
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating_at(Instant::now())
    }

    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.animating_until.map_or(false, |until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{PolicyPreset, PricingPolicy};

    fn calculator() -> CalculatorState {
        CalculatorState::new(PriceEngine::default())
    }

    #[test]
    fn test_initial_state() {
        let calc = calculator();
        assert_eq!(calc.final_price(), 75);
        assert_eq!(calc.result().base_rate, rust_decimal::Decimal::from(15));
        assert!(!calc.is_animating());
    }

    #[test]
    fn test_each_change_recomputes() {
        let mut calc = calculator();

        assert!(calc.update(InputChange::Pages(15)));
        assert_eq!(calc.final_price(), 214);

        assert!(calc.update(InputChange::Urgency(Urgency::Rush48h)));
        assert_eq!(calc.final_price(), 321);

        assert!(calc.update(InputChange::Discipline(Discipline::NonTechnical)));
        // 8 × 0.95 × 15 × 1.5 = 171
        assert_eq!(calc.final_price(), 171);
        assert_eq!(calc.result().input, *calc.input());
    }

    #[test]
    fn test_result_matches_fresh_computation() {
        let engine = PriceEngine::default();
        let mut calc = CalculatorState::new(engine.clone());
        for pages in [3, 12, 29, 44, 7] {
            calc.update(InputChange::Pages(pages));
            assert_eq!(calc.result(), &engine.price(calc.input()));
        }
    }

    #[test]
    fn test_pages_are_clamped() {
        let mut calc = calculator();
        calc.update(InputChange::Pages(0));
        assert_eq!(calc.input().pages, 1);
        calc.update(InputChange::Pages(500));
        assert_eq!(calc.input().pages, 50);
    }

    #[test]
    fn test_unchanged_value_is_a_no_op() {
        let mut calc = calculator();
        let t0 = Instant::now();
        assert!(!calc.update_at(InputChange::Pages(5), t0));
        assert!(!calc.is_animating_at(t0));
    }

    #[test]
    fn test_animation_window() {
        let mut calc = calculator();
        let t0 = Instant::now();
        calc.update_at(InputChange::Pages(6), t0);

        assert!(calc.is_animating_at(t0));
        assert!(calc.is_animating_at(t0 + Duration::from_millis(299)));
        assert!(!calc.is_animating_at(t0 + ANIMATION_WINDOW));
    }

    #[test]
    fn test_new_input_resets_animation() {
        let mut calc = calculator();
        let t0 = Instant::now();
        calc.update_at(InputChange::Pages(6), t0);
        calc.update_at(InputChange::Pages(7), t0 + Duration::from_millis(200));

        assert!(calc.is_animating_at(t0 + Duration::from_millis(400)));
        assert!(!calc.is_animating_at(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn test_animation_does_not_affect_result() {
        let mut calc = calculator();
        let t0 = Instant::now();
        calc.update_at(InputChange::Pages(15), t0);
        let during = calc.final_price();
        assert!(calc.is_animating_at(t0));
        assert!(!calc.is_animating_at(t0 + Duration::from_secs(1)));
        assert_eq!(calc.final_price(), during);
    }

    #[test]
    fn test_apply_all_recomputes_once() {
        let mut calc = CalculatorState::new(PriceEngine::new(PricingPolicy::from_preset(PolicyPreset::FlatBonus)));
        let start = Instant::now();
        let changed = calc.apply_all_at(
            &[
                InputChange::Discipline(Discipline::NonTechnical),
                InputChange::Pages(11),
                InputChange::Urgency(Urgency::Priority1Week),
            ],
            start,
        );
        assert!(changed);
        assert_eq!(calc.final_price(), 303);
        assert!(calc.is_animating_at(start + Duration::from_millis(299)));
        assert!(!calc.is_animating_at(start + ANIMATION_WINDOW));

        // No net change leaves the window where it was
        let later = start + Duration::from_millis(100);
        assert!(!calc.apply_all_at(&[InputChange::Pages(11)], later));
        assert!(!calc.is_animating_at(start + ANIMATION_WINDOW));
        assert!(calc.apply_all(&[InputChange::Pages(12)]));
    }
}
