//! Calculation stages of the regime engine.
//!
//! Each stage is a pure function. [`regime::RegimeCalculator`] runs them in
//! order for one regime: deductions, slab tax, rebate, surcharge, then cess.
//! [`comparator::compare`] runs the calculator for both regimes.

pub mod common;
pub mod comparator;
pub mod deductions;
pub mod rebate;
pub mod regime;
pub mod slab;
pub mod surcharge;

#[cfg(test)]
pub(crate) mod fixtures;

pub use comparator::compare;
pub use deductions::{DeductionSummary, aggregate_deductions};
pub use rebate::{RebateOutcome, apply_rebate};
pub use regime::{RegimeCalculator, compute_regime};
pub use slab::{old_regime_slab_tax, regime_slab_tax, slab_tax};
pub use surcharge::{SurchargeOutcome, apply_surcharge};
