//! Standard deduction and Chapter VI-A aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::non_negative;
use crate::models::{AgeBracket, DeductionProfile, IncomeProfile, Regime, RuleConfiguration};

/// Deductions allowed for one regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    pub standard_deduction: Decimal,
    pub chapter_via: Decimal,
}

impl DeductionSummary {
    pub fn total(&self) -> Decimal {
        self.standard_deduction + self.chapter_via
    }
}

/// Computes the standard deduction and the Chapter VI-A total for `regime`.
///
/// The standard deduction applies to salary only and never exceeds it. The
/// new regime allows no Chapter VI-A deductions at all.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::aggregate_deductions;
/// # use tax_core::*;
/// # fn rules() -> RuleConfiguration {
/// #     RuleConfiguration {
/// #         version: "test".into(),
/// #         assessment_year: "2026-27".into(),
/// #         valid_from: chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
/// #         valid_until: chrono::NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
/// #         new_regime: RegimeRules {
/// #             standard_deduction: dec!(75000),
/// #             rebate: RebateRule { threshold: dec!(1200000), max_rebate: None, marginal_relief: true },
/// #         },
/// #         old_regime: RegimeRules {
/// #             standard_deduction: dec!(50000),
/// #             rebate: RebateRule { threshold: dec!(500000), max_rebate: Some(dec!(12500)), marginal_relief: false },
/// #         },
/// #         new_regime_slabs: vec![Slab { upper_bound: None, rate: dec!(0.30) }],
/// #         old_regime_slabs: OldRegimeSlabs {
/// #             exemption_below_60: dec!(250000), exemption_60_to_80: dec!(300000),
/// #             exemption_above_80: dec!(500000), lower_band_ceiling: dec!(500000),
/// #             lower_rate: dec!(0.05), middle_band_ceiling: dec!(1000000),
/// #             middle_rate: dec!(0.20), upper_rate: dec!(0.30),
/// #         },
/// #         deduction_caps: DeductionCaps {
/// #             section_80c: dec!(150000), section_80d: dec!(25000), section_80tta: dec!(10000),
/// #             section_80ttb: dec!(50000), section_80ccd_1b: dec!(50000),
/// #         },
/// #         surcharge_tiers: vec![],
/// #         cess_rate: dec!(0.04),
/// #     }
/// # }
/// let income = IncomeProfile::salary_only(dec!(1000000));
/// let deductions = DeductionProfile {
///     section_80c: dec!(200000),
///     section_80d: dec!(25000),
///     ..DeductionProfile::default()
/// };
///
/// let summary = aggregate_deductions(Regime::Old, &income, &deductions, AgeBracket::Below60, &rules());
///
/// assert_eq!(summary.standard_deduction, dec!(50000));
/// assert_eq!(summary.chapter_via, dec!(175000));
/// ```
pub fn aggregate_deductions(
    regime: Regime,
    income: &IncomeProfile,
    deductions: &DeductionProfile,
    age: AgeBracket,
    rules: &RuleConfiguration,
) -> DeductionSummary {
    let standard_deduction = non_negative(income.salary).min(rules.regime(regime).standard_deduction);

    let chapter_via = match regime {
        Regime::New => Decimal::ZERO,
        Regime::Old => chapter_via_total(deductions, age, rules),
    };

    trace!(
        %regime,
        %standard_deduction,
        %chapter_via,
        "aggregated deductions"
    );

    DeductionSummary {
        standard_deduction,
        chapter_via,
    }
}

fn capped(
    value: Decimal,
    cap: Decimal,
) -> Decimal {
    non_negative(value).min(cap)
}

fn chapter_via_total(
    deductions: &DeductionProfile,
    age: AgeBracket,
    rules: &RuleConfiguration,
) -> Decimal {
    let caps = &rules.deduction_caps;

    let savings_interest = if age.is_senior() {
        capped(deductions.section_80ttb, caps.section_80ttb)
    } else {
        capped(deductions.section_80tta, caps.section_80tta)
    };

    let capped_total = capped(deductions.section_80c, caps.section_80c)
        + capped(deductions.section_80d, caps.section_80d)
        + capped(deductions.section_80ccd_1b, caps.section_80ccd_1b)
        + savings_interest;

    let uncapped_total = non_negative(deductions.housing_interest)
        + non_negative(deductions.section_80e)
        + non_negative(deductions.section_80g)
        + non_negative(deductions.other);

    capped_total + uncapped_total
}
