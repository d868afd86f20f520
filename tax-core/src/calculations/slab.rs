//! Marginal bracket integration.
//!
//! Nothing here knows about rebates, surcharge or cess. The surcharge stage
//! calls [`regime_slab_tax`] directly to price income at a tier threshold.

use rust_decimal::Decimal;

use crate::calculations::common::{max, non_negative};
use crate::models::{AgeBracket, OldRegimeSlabs, Regime, RuleConfiguration, Slab};

/// Integrates `taxable_income` over an ascending slab table.
///
/// Each slab taxes `max(0, min(income, ceiling) - floor)` at its rate, where
/// the floor is the previous slab's bound. An unbounded slab has no ceiling.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::Slab;
/// use tax_core::calculations::slab_tax;
///
/// let slabs = vec![
///     Slab { upper_bound: Some(dec!(400000)), rate: dec!(0) },
///     Slab { upper_bound: Some(dec!(800000)), rate: dec!(0.05) },
///     Slab { upper_bound: None, rate: dec!(0.10) },
/// ];
///
/// // 5% of 400000 + 10% of 100000
/// assert_eq!(slab_tax(dec!(900000), &slabs), dec!(30000));
/// ```
pub fn slab_tax(
    taxable_income: Decimal,
    slabs: &[Slab],
) -> Decimal {
    let income = non_negative(taxable_income);
    let mut floor = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for slab in slabs {
        if income <= floor {
            break;
        }

        let ceiling = slab.upper_bound.map_or(income, |bound| bound.min(income));
        tax += non_negative(ceiling - floor) * slab.rate;

        match slab.upper_bound {
            Some(bound) => floor = bound,
            None => break,
        }
    }

    tax
}

/// Old-regime slab tax as a closed three-term formula.
///
/// Gives the same result as [`slab_tax`] over
/// [`OldRegimeSlabs::to_slabs`] for the same age bracket.
pub fn old_regime_slab_tax(
    taxable_income: Decimal,
    slabs: &OldRegimeSlabs,
    age: AgeBracket,
) -> Decimal {
    let income = non_negative(taxable_income);
    let exemption = slabs.exemption_limit(age);
    let middle_floor = max(exemption, slabs.lower_band_ceiling);
    let upper_floor = max(exemption, slabs.middle_band_ceiling);

    let lower = non_negative(income.min(slabs.lower_band_ceiling) - exemption) * slabs.lower_rate;
    let middle = non_negative(income.min(slabs.middle_band_ceiling) - middle_floor) * slabs.middle_rate;
    let upper = non_negative(income - upper_floor) * slabs.upper_rate;

    lower + middle + upper
}

/// Base tax on `taxable_income` under `regime`.
///
/// The age bracket only matters for the old regime.
pub fn regime_slab_tax(
    regime: Regime,
    taxable_income: Decimal,
    age: AgeBracket,
    rules: &RuleConfiguration,
) -> Decimal {
    match regime {
        Regime::New => slab_tax(taxable_income, &rules.new_regime_slabs),
        Regime::Old => old_regime_slab_tax(taxable_income, &rules.old_regime_slabs, age),
    }
}
