//! Zero-tax rebate and the marginal relief just above its threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::non_negative;
use crate::models::RebateRule;

/// Rebate granted on the base tax. At most one of the two fields is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateOutcome {
    pub rebate: Decimal,
    pub marginal_relief: Decimal,
}

impl RebateOutcome {
    pub fn total(&self) -> Decimal {
        self.rebate + self.marginal_relief
    }
}

/// Applies `rule` to `base_tax` for the given taxable income.
///
/// At or below the threshold the rebate covers the base tax, up to
/// `max_rebate` when one is set. Above it, when the rule carries marginal
/// relief, the tax is limited to the income in excess of the threshold.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::RebateRule;
/// use tax_core::calculations::apply_rebate;
///
/// let rule = RebateRule {
///     threshold: dec!(1200000),
///     max_rebate: None,
///     marginal_relief: true,
/// };
///
/// // Base tax 61500 on 1210000; only 10000 of income sits above the threshold.
/// let outcome = apply_rebate(&rule, dec!(1210000), dec!(61500));
///
/// assert_eq!(outcome.rebate, dec!(0));
/// assert_eq!(outcome.marginal_relief, dec!(51500));
/// ```
pub fn apply_rebate(
    rule: &RebateRule,
    taxable_income: Decimal,
    base_tax: Decimal,
) -> RebateOutcome {
    let base_tax = non_negative(base_tax);

    if taxable_income <= rule.threshold {
        let rebate = match rule.max_rebate {
            Some(cap) => base_tax.min(non_negative(cap)),
            None => base_tax,
        };
        return RebateOutcome {
            rebate,
            marginal_relief: Decimal::ZERO,
        };
    }

    if !rule.marginal_relief {
        return RebateOutcome::default();
    }

    let excess = taxable_income - rule.threshold;
    let marginal_relief = non_negative(base_tax - excess);

    if marginal_relief > Decimal::ZERO {
        trace!(
            %taxable_income,
            %base_tax,
            %excess,
            %marginal_relief,
            "rebate marginal relief applied"
        );
    }

    RebateOutcome {
        rebate: Decimal::ZERO,
        marginal_relief,
    }
}
