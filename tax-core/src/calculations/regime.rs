//! Full tax computation for a single regime.
//!
//! | Step | Stage |
//! |------|-------|
//! | 1    | Standard deduction and Chapter VI-A ([`aggregate_deductions`]) |
//! | 2    | Taxable income (gross income minus deductions, minimum 0) |
//! | 3    | Tax on income from the regime's slabs ([`regime_slab_tax`]) |
//! | 4    | Rebate or rebate marginal relief ([`apply_rebate`]) |
//! | 5    | Surcharge net of its marginal relief ([`apply_surcharge`]) |
//! | 6    | Tax before cess (step 3 - step 4 + step 5, minimum 0) |
//! | 7    | Cess on step 6 |
//! | 8    | Total tax (step 6 + step 7) |

use tracing::debug;

use crate::calculations::common::non_negative;
use crate::calculations::deductions::aggregate_deductions;
use crate::calculations::rebate::apply_rebate;
use crate::calculations::slab::regime_slab_tax;
use crate::calculations::surcharge::apply_surcharge;
use crate::models::{
    AgeBracket, DeductionProfile, IncomeProfile, Regime, RuleConfiguration, TaxResult,
};

/// Runs the tax pipeline against one borrowed ruleset.
///
/// Holds no state besides the ruleset reference, so one calculator can be
/// shared freely between threads and reused for any number of taxpayers.
#[derive(Debug, Clone, Copy)]
pub struct RegimeCalculator<'a> {
    rules: &'a RuleConfiguration,
}

impl<'a> RegimeCalculator<'a> {
    pub fn new(rules: &'a RuleConfiguration) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a RuleConfiguration {
        self.rules
    }

    /// Computes the complete breakdown for `regime`.
    pub fn compute(
        &self,
        regime: Regime,
        income: &IncomeProfile,
        deductions: &DeductionProfile,
        age: AgeBracket,
    ) -> TaxResult {
        let rules = self.rules;
        let gross_income = income.gross_income();

        let allowed = aggregate_deductions(regime, income, deductions, age, rules);
        let total_deductions = allowed.total();
        let taxable_income = non_negative(gross_income - total_deductions);

        let tax_on_income = regime_slab_tax(regime, taxable_income, age, rules);

        let rebate = apply_rebate(&rules.regime(regime).rebate, taxable_income, tax_on_income);
        let tax_after_rebate = non_negative(tax_on_income - rebate.total());

        let surcharge = apply_surcharge(regime, taxable_income, tax_after_rebate, age, rules);

        let tax_before_cess = non_negative(tax_after_rebate + surcharge.net_surcharge);
        let cess = tax_before_cess * rules.cess_rate;
        let total_tax = tax_before_cess + cess;

        debug!(
            %regime,
            %age,
            %gross_income,
            %taxable_income,
            %tax_on_income,
            surcharge_rate = %surcharge.rate,
            %total_tax,
            "computed regime tax"
        );

        TaxResult {
            regime,
            gross_income,
            standard_deduction: allowed.standard_deduction,
            chapter_via_deductions: allowed.chapter_via,
            total_deductions,
            taxable_income,
            tax_on_income,
            rebate: rebate.rebate,
            surcharge: surcharge.net_surcharge,
            marginal_relief: rebate.marginal_relief + surcharge.marginal_relief,
            tax_before_cess,
            cess,
            total_tax,
        }
    }
}

/// Computes the tax breakdown for one regime.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use tax_core::*;
///
/// let rules = RuleConfiguration {
///     version: "FY2025-26".to_string(),
///     assessment_year: "2026-27".to_string(),
///     valid_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     valid_until: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
///     new_regime: RegimeRules {
///         standard_deduction: dec!(75000),
///         rebate: RebateRule { threshold: dec!(1200000), max_rebate: None, marginal_relief: true },
///     },
///     old_regime: RegimeRules {
///         standard_deduction: dec!(50000),
///         rebate: RebateRule { threshold: dec!(500000), max_rebate: Some(dec!(12500)), marginal_relief: false },
///     },
///     new_regime_slabs: vec![
///         Slab { upper_bound: Some(dec!(400000)), rate: dec!(0) },
///         Slab { upper_bound: Some(dec!(800000)), rate: dec!(0.05) },
///         Slab { upper_bound: Some(dec!(1200000)), rate: dec!(0.10) },
///         Slab { upper_bound: Some(dec!(1600000)), rate: dec!(0.15) },
///         Slab { upper_bound: Some(dec!(2000000)), rate: dec!(0.20) },
///         Slab { upper_bound: Some(dec!(2400000)), rate: dec!(0.25) },
///         Slab { upper_bound: None, rate: dec!(0.30) },
///     ],
///     old_regime_slabs: OldRegimeSlabs {
///         exemption_below_60: dec!(250000),
///         exemption_60_to_80: dec!(300000),
///         exemption_above_80: dec!(500000),
///         lower_band_ceiling: dec!(500000),
///         lower_rate: dec!(0.05),
///         middle_band_ceiling: dec!(1000000),
///         middle_rate: dec!(0.20),
///         upper_rate: dec!(0.30),
///     },
///     deduction_caps: DeductionCaps {
///         section_80c: dec!(150000),
///         section_80d: dec!(25000),
///         section_80tta: dec!(10000),
///         section_80ttb: dec!(50000),
///         section_80ccd_1b: dec!(50000),
///     },
///     surcharge_tiers: vec![],
///     cess_rate: dec!(0.04),
/// };
///
/// let income = IncomeProfile {
///     business: dec!(3075000),
///     ..IncomeProfile::default()
/// };
///
/// let result = compute_regime(
///     Regime::New,
///     &income,
///     &DeductionProfile::default(),
///     AgeBracket::Below60,
///     &rules,
/// );
///
/// assert_eq!(result.taxable_income, dec!(3075000));
/// assert_eq!(result.tax_on_income, dec!(502500));
/// assert_eq!(result.total_tax, dec!(522600));
/// ```
pub fn compute_regime(
    regime: Regime,
    income: &IncomeProfile,
    deductions: &DeductionProfile,
    age: AgeBracket,
    rules: &RuleConfiguration,
) -> TaxResult {
    RegimeCalculator::new(rules).compute(regime, income, deductions, age)
}
