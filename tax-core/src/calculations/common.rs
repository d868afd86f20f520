//! Helpers shared by the calculation stages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to the minor unit (two decimal places), with
/// midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(499200.004)), dec!(499200.00));
/// assert_eq!(round_half_up(dec!(499200.005)), dec!(499200.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two amounts.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clamps an amount at zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-1)), dec!(0));
/// assert_eq!(non_negative(dec!(1)), dec!(1));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}
