use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized deductions claimed by the taxpayer.
///
/// Fields with a cap in [`DeductionCaps`](crate::DeductionCaps) are limited to
/// that cap; the rest pass through unchanged. Only the old regime allows
/// any of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionProfile {
    /// Investments and payments under section 80C (PPF, ELSS, premiums, principal).
    pub section_80c: Decimal,
    /// Health insurance premiums under section 80D.
    pub section_80d: Decimal,
    /// Savings account interest under section 80TTA (below 60 only).
    pub section_80tta: Decimal,
    /// Deposit interest under section 80TTB (60 and above only).
    pub section_80ttb: Decimal,
    /// Additional pension scheme contribution under section 80CCD(1B).
    pub section_80ccd_1b: Decimal,
    /// House rent allowance exemption or home loan interest.
    pub housing_interest: Decimal,
    /// Education loan interest under section 80E.
    pub section_80e: Decimal,
    /// Donations under section 80G.
    pub section_80g: Decimal,
    pub other: Decimal,
}
