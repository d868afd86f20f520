//! Behavioural checks of the engine against the built-in FY 2025-26 rules.
//!
//! Each test sweeps a range of incomes rather than a single value, so they
//! complement the worked examples in the `tax-core` unit tests.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::calculations::common::round_half_up;
use tax_core::calculations::regime_slab_tax;
use tax_core::{
    AgeBracket, DeductionProfile, IncomeProfile, Recommendation, Regime, RegimeCalculator,
    compare, compute_regime,
};
use tax_data::defaults;

fn business(amount: Decimal) -> IncomeProfile {
    IncomeProfile {
        business: amount,
        ..IncomeProfile::default()
    }
}

fn sweep(
    from: Decimal,
    to: Decimal,
    step: Decimal,
) -> Vec<Decimal> {
    let mut values = Vec::new();
    let mut value = from;
    while value <= to {
        values.push(value);
        value += step;
    }
    values
}

fn typical_deductions() -> DeductionProfile {
    DeductionProfile {
        section_80c: dec!(150000),
        section_80d: dec!(25000),
        housing_interest: dec!(200000),
        ..DeductionProfile::default()
    }
}

// =============================================================================
// Monotonicity
// =============================================================================

#[test]
fn total_tax_never_falls_as_income_rises() {
    let rules = defaults::fy2025_26();
    let calculator = RegimeCalculator::new(&rules);
    let incomes = sweep(dec!(0), dec!(60000000), dec!(123457));

    for regime in Regime::ALL {
        for age in AgeBracket::ALL {
            let mut previous = Decimal::ZERO;
            for &salary in &incomes {
                let result = calculator.compute(
                    regime,
                    &IncomeProfile::salary_only(salary),
                    &typical_deductions(),
                    age,
                );
                assert!(
                    result.total_tax >= previous,
                    "{regime} {age}: tax fell to {} at salary {salary}",
                    result.total_tax
                );
                previous = result.total_tax;
            }
        }
    }
}

#[test]
fn total_tax_never_falls_across_thresholds() {
    let rules = defaults::fy2025_26();
    let calculator = RegimeCalculator::new(&rules);
    let thresholds = [
        dec!(500000),
        dec!(1200000),
        dec!(5000000),
        dec!(10000000),
        dec!(20000000),
        dec!(50000000),
    ];

    for regime in Regime::ALL {
        for threshold in thresholds {
            let mut previous = Decimal::ZERO;
            for income in sweep(threshold - dec!(2000), threshold + dec!(2000), dec!(50)) {
                let result = calculator.compute(
                    regime,
                    &business(income),
                    &DeductionProfile::default(),
                    AgeBracket::Below60,
                );
                assert!(
                    result.total_tax >= previous,
                    "{regime}: tax fell to {} at {income}",
                    result.total_tax
                );
                previous = result.total_tax;
            }
        }
    }
}

// =============================================================================
// Marginal relief
// =============================================================================

#[test]
fn rebate_relief_caps_tax_at_excess_over_threshold() {
    let rules = defaults::fy2025_26();
    let threshold = rules.new_regime.rebate.threshold;

    for excess in sweep(dec!(1), dec!(100000), dec!(997)) {
        let result = compute_regime(
            Regime::New,
            &business(threshold + excess),
            &DeductionProfile::default(),
            AgeBracket::Below60,
            &rules,
        );
        assert!(
            result.tax_before_cess <= excess,
            "tax {} exceeds excess {excess}",
            result.tax_before_cess
        );
        assert!(result.total_tax <= excess * (Decimal::ONE + rules.cess_rate));
    }
}

#[test]
fn surcharge_relief_caps_tax_at_each_tier() {
    let rules = defaults::fy2025_26();

    for regime in Regime::ALL {
        let mut lower_rate = Decimal::ZERO;
        for tier in &rules.surcharge_tiers {
            let threshold_tax =
                regime_slab_tax(regime, tier.threshold, AgeBracket::Below60, &rules);
            let ceiling_at_threshold = threshold_tax * (Decimal::ONE + lower_rate);

            for excess in [dec!(1), dec!(100), dec!(10000), dec!(100000), dec!(250000)] {
                let result = compute_regime(
                    regime,
                    &business(tier.threshold + excess),
                    &DeductionProfile::default(),
                    AgeBracket::Below60,
                    &rules,
                );
                assert!(
                    result.tax_before_cess <= ceiling_at_threshold + excess,
                    "{regime} tier {}: tax {} above {}",
                    tier.threshold,
                    result.tax_before_cess,
                    ceiling_at_threshold + excess
                );
            }
            lower_rate = tier.rate_for(regime);
        }
    }
}

// =============================================================================
// Deductions
// =============================================================================

#[test]
fn chapter_via_is_ignored_in_new_regime() {
    let rules = defaults::fy2025_26();
    let generous = DeductionProfile {
        section_80c: dec!(1000000),
        section_80d: dec!(1000000),
        section_80tta: dec!(1000000),
        section_80ttb: dec!(1000000),
        section_80ccd_1b: dec!(1000000),
        housing_interest: dec!(1000000),
        section_80e: dec!(1000000),
        section_80g: dec!(1000000),
        other: dec!(1000000),
    };

    for salary in sweep(dec!(0), dec!(30000000), dec!(1234567)) {
        let income = IncomeProfile::salary_only(salary);
        let with = compute_regime(Regime::New, &income, &generous, AgeBracket::Below60, &rules);
        let without = compute_regime(
            Regime::New,
            &income,
            &DeductionProfile::default(),
            AgeBracket::Below60,
            &rules,
        );

        assert_eq!(with.chapter_via_deductions, dec!(0));
        assert_eq!(with.total_tax, without.total_tax);
    }
}

#[test]
fn capped_sections_never_exceed_their_caps() {
    let rules = defaults::fy2025_26();
    let caps = &rules.deduction_caps;
    let oversized = DeductionProfile {
        section_80c: dec!(900000),
        section_80d: dec!(900000),
        section_80tta: dec!(900000),
        section_80ttb: dec!(900000),
        section_80ccd_1b: dec!(900000),
        ..DeductionProfile::default()
    };
    let income = IncomeProfile::salary_only(dec!(5000000));

    let young = compute_regime(Regime::Old, &income, &oversized, AgeBracket::Below60, &rules);
    let senior = compute_regime(Regime::Old, &income, &oversized, AgeBracket::Above80, &rules);

    assert_eq!(
        young.chapter_via_deductions,
        caps.section_80c + caps.section_80d + caps.section_80tta + caps.section_80ccd_1b
    );
    assert_eq!(
        senior.chapter_via_deductions,
        caps.section_80c + caps.section_80d + caps.section_80ttb + caps.section_80ccd_1b
    );
}

// =============================================================================
// Comparator
// =============================================================================

#[test]
fn comparison_agrees_with_rounded_totals() {
    let rules = defaults::fy2025_26();

    for salary in sweep(dec!(0), dec!(8000000), dec!(87654)) {
        for deductions in [DeductionProfile::default(), typical_deductions()] {
            let result = compare(
                &IncomeProfile::salary_only(salary),
                &deductions,
                AgeBracket::Below60,
                &rules,
            );
            let new_total = round_half_up(result.new_regime.total_tax);
            let old_total = round_half_up(result.old_regime.total_tax);

            let expected = if new_total < old_total {
                Recommendation::New
            } else if old_total < new_total {
                Recommendation::Old
            } else {
                Recommendation::Equal
            };
            assert_eq!(result.recommendation, expected, "salary {salary}");
            assert_eq!(result.savings, (new_total - old_total).abs());
            assert!(result.savings >= dec!(0));
        }
    }
}

#[test]
fn engine_types_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<tax_core::RuleConfiguration>();
    assert_send_sync::<RegimeCalculator<'static>>();
    assert_send_sync::<tax_core::TaxResult>();
    assert_send_sync::<tax_core::ComparisonResult>();
}

#[test]
fn computation_is_repeatable() {
    let rules = defaults::fy2025_26();
    let calculator = RegimeCalculator::new(&rules);
    let income = IncomeProfile {
        salary: dec!(4200000),
        house_property: dec!(-150000),
        capital_gains: dec!(900000),
        other_sources: dec!(60000),
        ..IncomeProfile::default()
    };

    for regime in Regime::ALL {
        let first = calculator.compute(regime, &income, &typical_deductions(), AgeBracket::From60To80);
        let second = calculator.compute(regime, &income, &typical_deductions(), AgeBracket::From60To80);
        assert_eq!(first, second);
    }

    assert_eq!(
        compare(&income, &typical_deductions(), AgeBracket::Below60, &rules),
        compare(&income, &typical_deductions(), AgeBracket::Below60, &rules)
    );
}
