//! Consistency checks for a [`RuleConfiguration`] before it reaches the engine.
//!
//! The engine trusts its ruleset. Anything that builds one from outside data
//! runs [`validate_rules`] first.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tax_core::{RuleConfiguration, Slab};
use thiserror::Error;

/// The first problem found in a ruleset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleConfigError {
    #[error("new regime slab table is empty")]
    EmptySlabTable,

    #[error("slab {index} upper bound {bound} does not exceed the previous bound {previous}")]
    NonIncreasingSlabBound {
        index: usize,
        bound: Decimal,
        previous: Decimal,
    },

    #[error("slab {index} rate {rate} is lower than the previous rate {previous}")]
    DecreasingSlabRate {
        index: usize,
        rate: Decimal,
        previous: Decimal,
    },

    #[error("slab {index} is unbounded but is not the last slab")]
    UnboundedSlabNotLast { index: usize },

    #[error("last slab must be unbounded")]
    MissingUnboundedSlab,

    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidRate { field: String, value: Decimal },

    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: String, value: Decimal },

    #[error("old regime exemption limits must not shrink with age")]
    ShrinkingExemption,

    #[error("old regime band ceilings must satisfy exemption < lower ceiling < middle ceiling")]
    MisorderedOldRegimeBands,

    #[error("surcharge tier {index} threshold {threshold} does not exceed the previous {previous}")]
    NonIncreasingSurchargeThreshold {
        index: usize,
        threshold: Decimal,
        previous: Decimal,
    },

    #[error("validity window starts on {from} but ends on {until}")]
    InvalidValidityWindow { from: NaiveDate, until: NaiveDate },
}

fn check_rate(
    field: &str,
    value: Decimal,
) -> Result<(), RuleConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(RuleConfigError::InvalidRate {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_amount(
    field: &str,
    value: Decimal,
) -> Result<(), RuleConfigError> {
    if value < Decimal::ZERO {
        return Err(RuleConfigError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_slabs(slabs: &[Slab]) -> Result<(), RuleConfigError> {
    let Some(last) = slabs.last() else {
        return Err(RuleConfigError::EmptySlabTable);
    };
    if last.upper_bound.is_some() {
        return Err(RuleConfigError::MissingUnboundedSlab);
    }

    let mut previous_bound = Decimal::ZERO;
    let mut previous_rate = Decimal::ZERO;

    for (index, slab) in slabs.iter().enumerate() {
        check_rate(&format!("slab {index} rate"), slab.rate)?;

        if slab.rate < previous_rate {
            return Err(RuleConfigError::DecreasingSlabRate {
                index,
                rate: slab.rate,
                previous: previous_rate,
            });
        }
        previous_rate = slab.rate;

        match slab.upper_bound {
            Some(bound) if bound <= previous_bound => {
                return Err(RuleConfigError::NonIncreasingSlabBound {
                    index,
                    bound,
                    previous: previous_bound,
                });
            }
            Some(bound) => previous_bound = bound,
            None if index + 1 < slabs.len() => {
                return Err(RuleConfigError::UnboundedSlabNotLast { index });
            }
            None => {}
        }
    }

    Ok(())
}

/// Checks every invariant the engine relies on.
///
/// # Errors
///
/// Returns the first [`RuleConfigError`] found.
pub fn validate_rules(rules: &RuleConfiguration) -> Result<(), RuleConfigError> {
    if rules.valid_from > rules.valid_until {
        return Err(RuleConfigError::InvalidValidityWindow {
            from: rules.valid_from,
            until: rules.valid_until,
        });
    }

    validate_slabs(&rules.new_regime_slabs)?;

    for (name, regime) in [("new", &rules.new_regime), ("old", &rules.old_regime)] {
        check_amount(
            &format!("{name} regime standard deduction"),
            regime.standard_deduction,
        )?;
        check_amount(
            &format!("{name} regime rebate threshold"),
            regime.rebate.threshold,
        )?;
        if let Some(cap) = regime.rebate.max_rebate {
            check_amount(&format!("{name} regime maximum rebate"), cap)?;
        }
    }

    let old = &rules.old_regime_slabs;
    check_amount("old regime exemption below 60", old.exemption_below_60)?;
    if old.exemption_60_to_80 < old.exemption_below_60
        || old.exemption_above_80 < old.exemption_60_to_80
    {
        return Err(RuleConfigError::ShrinkingExemption);
    }
    if old.exemption_below_60 >= old.lower_band_ceiling
        || old.lower_band_ceiling >= old.middle_band_ceiling
    {
        return Err(RuleConfigError::MisorderedOldRegimeBands);
    }
    check_rate("old regime lower rate", old.lower_rate)?;
    check_rate("old regime middle rate", old.middle_rate)?;
    check_rate("old regime upper rate", old.upper_rate)?;

    let caps = &rules.deduction_caps;
    for (field, value) in [
        ("80C cap", caps.section_80c),
        ("80D cap", caps.section_80d),
        ("80TTA cap", caps.section_80tta),
        ("80TTB cap", caps.section_80ttb),
        ("80CCD(1B) cap", caps.section_80ccd_1b),
    ] {
        check_amount(field, value)?;
    }

    let mut previous = Decimal::ZERO;
    for (index, tier) in rules.surcharge_tiers.iter().enumerate() {
        if index > 0 && tier.threshold <= previous {
            return Err(RuleConfigError::NonIncreasingSurchargeThreshold {
                index,
                threshold: tier.threshold,
                previous,
            });
        }
        check_amount(&format!("surcharge tier {index} threshold"), tier.threshold)?;
        check_rate(&format!("surcharge tier {index} rate"), tier.rate)?;
        if let Some(rate) = tier.new_regime_rate {
            check_rate(&format!("surcharge tier {index} new regime rate"), rate)?;
        }
        previous = tier.threshold;
    }

    check_rate("cess rate", rules.cess_rate)?;

    Ok(())
}
