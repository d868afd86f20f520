//! Side-by-side comparison of the two regimes.

use std::cmp::Ordering;

use tracing::debug;

use crate::calculations::common::round_half_up;
use crate::calculations::regime::RegimeCalculator;
use crate::models::{
    AgeBracket, ComparisonResult, DeductionProfile, IncomeProfile, Recommendation, Regime,
    RuleConfiguration,
};

/// Computes both regimes for the same taxpayer and recommends the cheaper.
///
/// Totals are rounded half-up to two decimal places before they are
/// compared, so sub-paisa differences never flip the recommendation. Equal
/// rounded totals give [`Recommendation::Equal`] and zero savings; otherwise
/// the savings are the difference between the rounded totals.
pub fn compare(
    income: &IncomeProfile,
    deductions: &DeductionProfile,
    age: AgeBracket,
    rules: &RuleConfiguration,
) -> ComparisonResult {
    let calculator = RegimeCalculator::new(rules);
    let new_regime = calculator.compute(Regime::New, income, deductions, age);
    let old_regime = calculator.compute(Regime::Old, income, deductions, age);

    let new_total = round_half_up(new_regime.total_tax);
    let old_total = round_half_up(old_regime.total_tax);

    let recommendation = match new_total.cmp(&old_total) {
        Ordering::Less => Recommendation::New,
        Ordering::Greater => Recommendation::Old,
        Ordering::Equal => Recommendation::Equal,
    };
    let savings = (new_total - old_total).abs();

    debug!(
        %new_total,
        %old_total,
        recommendation = recommendation.as_str(),
        %savings,
        "compared regimes"
    );

    ComparisonResult {
        new_regime,
        old_regime,
        recommendation,
        savings,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::fixtures;

    #[test]
    fn new_regime_wins_without_deductions() {
        let rules = fixtures::rules();

        let result = compare(
            &IncomeProfile::salary_only(dec!(1800000)),
            &DeductionProfile::default(),
            AgeBracket::Below60,
            &rules,
        );

        assert_eq!(result.recommendation, Recommendation::New);
        assert_eq!(
            result.savings,
            result.old_regime.total_tax - result.new_regime.total_tax
        );
        assert_eq!(result.recommended(), Some(&result.new_regime));
    }

    #[test]
    fn old_regime_wins_with_heavy_deductions() {
        let rules = fixtures::rules();
        let deductions = DeductionProfile {
            section_80c: dec!(150000),
            section_80d: dec!(25000),
            section_80ccd_1b: dec!(50000),
            housing_interest: dec!(1500000),
            section_80e: dec!(300000),
            ..DeductionProfile::default()
        };

        let result = compare(
            &IncomeProfile::salary_only(dec!(3000000)),
            &deductions,
            AgeBracket::Below60,
            &rules,
        );

        assert_eq!(result.recommendation, Recommendation::Old);
        assert!(result.savings > dec!(0));
    }

    #[test]
    fn both_zero_is_equal() {
        let rules = fixtures::rules();

        let result = compare(
            &IncomeProfile::salary_only(dec!(500000)),
            &DeductionProfile::default(),
            AgeBracket::Below60,
            &rules,
        );

        assert_eq!(result.recommendation, Recommendation::Equal);
        assert_eq!(result.savings, dec!(0));
        assert_eq!(result.recommended(), None);
    }

    #[test]
    fn sub_paisa_difference_is_equal() {
        let mut rules = fixtures::rules();
        // Price the new regime like the old one, with a marginally higher top rate.
        rules.new_regime = rules.old_regime.clone();
        rules.new_regime_slabs = rules.old_regime_slabs.to_slabs(AgeBracket::Below60);
        if let Some(top) = rules.new_regime_slabs.last_mut() {
            top.rate = dec!(0.3000001);
        }

        let result = compare(
            &IncomeProfile::salary_only(dec!(1050010)),
            &DeductionProfile::default(),
            AgeBracket::Below60,
            &rules,
        );

        assert_eq!(result.old_regime.total_tax, dec!(117003.12));
        assert!(result.new_regime.total_tax > result.old_regime.total_tax);
        assert_eq!(result.recommendation, Recommendation::Equal);
        assert_eq!(result.savings, dec!(0));
    }
}
