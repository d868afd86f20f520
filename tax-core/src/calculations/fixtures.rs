//! Rules for the 2025-26 financial year, shared by the unit tests.
//!
//! Mirrors `tax_data::defaults::fy2025_26`; keep the two in step.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::models::{
    DeductionCaps, OldRegimeSlabs, RebateRule, RegimeRules, RuleConfiguration, Slab,
    SurchargeTier,
};

fn slab(
    upper_bound: Option<rust_decimal::Decimal>,
    rate: rust_decimal::Decimal,
) -> Slab {
    Slab { upper_bound, rate }
}

pub(crate) fn rules() -> RuleConfiguration {
    RuleConfiguration {
        version: "FY2025-26".to_string(),
        assessment_year: "2026-27".to_string(),
        valid_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        valid_until: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        new_regime: RegimeRules {
            standard_deduction: dec!(75000),
            rebate: RebateRule {
                threshold: dec!(1200000),
                max_rebate: None,
                marginal_relief: true,
            },
        },
        old_regime: RegimeRules {
            standard_deduction: dec!(50000),
            rebate: RebateRule {
                threshold: dec!(500000),
                max_rebate: Some(dec!(12500)),
                marginal_relief: false,
            },
        },
        new_regime_slabs: vec![
            slab(Some(dec!(400000)), dec!(0)),
            slab(Some(dec!(800000)), dec!(0.05)),
            slab(Some(dec!(1200000)), dec!(0.10)),
            slab(Some(dec!(1600000)), dec!(0.15)),
            slab(Some(dec!(2000000)), dec!(0.20)),
            slab(Some(dec!(2400000)), dec!(0.25)),
            slab(None, dec!(0.30)),
        ],
        old_regime_slabs: OldRegimeSlabs {
            exemption_below_60: dec!(250000),
            exemption_60_to_80: dec!(300000),
            exemption_above_80: dec!(500000),
            lower_band_ceiling: dec!(500000),
            lower_rate: dec!(0.05),
            middle_band_ceiling: dec!(1000000),
            middle_rate: dec!(0.20),
            upper_rate: dec!(0.30),
        },
        deduction_caps: DeductionCaps {
            section_80c: dec!(150000),
            section_80d: dec!(25000),
            section_80tta: dec!(10000),
            section_80ttb: dec!(50000),
            section_80ccd_1b: dec!(50000),
        },
        surcharge_tiers: vec![
            SurchargeTier {
                threshold: dec!(5000000),
                rate: dec!(0.10),
                new_regime_rate: None,
            },
            SurchargeTier {
                threshold: dec!(10000000),
                rate: dec!(0.15),
                new_regime_rate: None,
            },
            SurchargeTier {
                threshold: dec!(20000000),
                rate: dec!(0.25),
                new_regime_rate: None,
            },
            SurchargeTier {
                threshold: dec!(50000000),
                rate: dec!(0.37),
                new_regime_rate: Some(dec!(0.25)),
            },
        ],
        cess_rate: dec!(0.04),
    }
}
