//! Tiered surcharge with marginal relief at each tier boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::non_negative;
use crate::calculations::slab::regime_slab_tax;
use crate::models::{AgeBracket, Regime, RuleConfiguration};

/// Surcharge levied on the tax after rebate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeOutcome {
    pub rate: Decimal,
    pub basic_surcharge: Decimal,
    pub marginal_relief: Decimal,
    /// `basic_surcharge - marginal_relief`.
    pub net_surcharge: Decimal,
}

/// Computes the surcharge on `tax_after_rebate` for `taxable_income`.
///
/// The tier is the highest one whose threshold lies strictly below the
/// income. Crossing a threshold may not raise tax plus surcharge by more than
/// the income above it: the cap is the slab tax at the threshold, with the
/// next-lower tier's surcharge, plus the excess income. Anything over the cap
/// is returned as marginal relief.
///
/// The threshold tax is priced with the taxpayer's own age bracket.
pub fn apply_surcharge(
    regime: Regime,
    taxable_income: Decimal,
    tax_after_rebate: Decimal,
    age: AgeBracket,
    rules: &RuleConfiguration,
) -> SurchargeOutcome {
    let tiers = &rules.surcharge_tiers;
    let Some(index) = tiers
        .iter()
        .rposition(|tier| taxable_income > tier.threshold)
    else {
        return SurchargeOutcome::default();
    };

    let tier = &tiers[index];
    let rate = tier.rate_for(regime);
    let tax_after_rebate = non_negative(tax_after_rebate);
    let basic_surcharge = tax_after_rebate * rate;

    if rate <= Decimal::ZERO {
        return SurchargeOutcome {
            rate,
            ..SurchargeOutcome::default()
        };
    }

    let threshold_tax = regime_slab_tax(regime, tier.threshold, age, rules);
    let next_lower_rate = index
        .checked_sub(1)
        .map_or(Decimal::ZERO, |lower| tiers[lower].rate_for(regime));
    let max_payable =
        threshold_tax * (Decimal::ONE + next_lower_rate) + (taxable_income - tier.threshold);

    let marginal_relief =
        non_negative(tax_after_rebate + basic_surcharge - max_payable).min(basic_surcharge);

    if marginal_relief > Decimal::ZERO {
        debug!(
            %regime,
            %taxable_income,
            threshold = %tier.threshold,
            %threshold_tax,
            %max_payable,
            %marginal_relief,
            "surcharge marginal relief applied"
        );
    }

    SurchargeOutcome {
        rate,
        basic_surcharge,
        marginal_relief,
        net_surcharge: basic_surcharge - marginal_relief,
    }
}
