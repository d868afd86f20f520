//! Progressive income tax computation under the new and old regimes.
//!
//! The engine is a set of pure functions over an [`IncomeProfile`], a
//! [`DeductionProfile`], an [`AgeBracket`] and a [`RuleConfiguration`]. It
//! performs no I/O and keeps no state; callers supply a validated ruleset.

pub mod calculations;
pub mod models;

pub use calculations::{RegimeCalculator, compare, compute_regime};
pub use models::*;
