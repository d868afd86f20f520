use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AgeBracket, Regime};

/// One marginal band of a slab table.
///
/// The band starts at the previous slab's `upper_bound` (zero for the first
/// slab) and ends at its own. `None` means the band is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slab {
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// Old-regime slab scheme: a zero-rate band whose width depends on age,
/// followed by three fixed bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OldRegimeSlabs {
    pub exemption_below_60: Decimal,
    pub exemption_60_to_80: Decimal,
    pub exemption_above_80: Decimal,
    pub lower_band_ceiling: Decimal,
    pub lower_rate: Decimal,
    pub middle_band_ceiling: Decimal,
    pub middle_rate: Decimal,
    pub upper_rate: Decimal,
}

impl OldRegimeSlabs {
    /// Income taxed at zero for the given age bracket.
    pub fn exemption_limit(
        &self,
        age: AgeBracket,
    ) -> Decimal {
        match age {
            AgeBracket::Below60 => self.exemption_below_60,
            AgeBracket::From60To80 => self.exemption_60_to_80,
            AgeBracket::Above80 => self.exemption_above_80,
        }
    }

    /// Renders the scheme for one age bracket as a generic slab table.
    ///
    /// Bands swallowed by a wide exemption are left out so the bounds stay
    /// strictly increasing.
    pub fn to_slabs(
        &self,
        age: AgeBracket,
    ) -> Vec<Slab> {
        let exemption = self.exemption_limit(age);
        let mut slabs = vec![Slab {
            upper_bound: Some(exemption),
            rate: Decimal::ZERO,
        }];

        for (ceiling, rate) in [
            (self.lower_band_ceiling, self.lower_rate),
            (self.middle_band_ceiling, self.middle_rate),
        ] {
            if ceiling > exemption {
                slabs.push(Slab {
                    upper_bound: Some(ceiling),
                    rate,
                });
            }
        }

        slabs.push(Slab {
            upper_bound: None,
            rate: self.upper_rate,
        });
        slabs
    }
}

/// Zero-tax rebate for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateRule {
    /// Taxable income at or below which the rebate is granted.
    pub threshold: Decimal,
    /// Largest rebate granted. `None` rebates the full tax.
    #[serde(default)]
    pub max_rebate: Option<Decimal>,
    /// Whether tax just above the threshold is limited to the income above it.
    #[serde(default)]
    pub marginal_relief: bool,
}

/// Settings that differ between the two regimes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeRules {
    pub standard_deduction: Decimal,
    pub rebate: RebateRule,
}

/// Upper limits for the capped Chapter VI-A deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionCaps {
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub section_80tta: Decimal,
    pub section_80ttb: Decimal,
    pub section_80ccd_1b: Decimal,
}

/// A surcharge tier, applying to taxable income strictly above `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeTier {
    pub threshold: Decimal,
    pub rate: Decimal,
    /// Replaces `rate` under the new regime when set.
    #[serde(default)]
    pub new_regime_rate: Option<Decimal>,
}

impl SurchargeTier {
    pub fn rate_for(
        &self,
        regime: Regime,
    ) -> Decimal {
        match (regime, self.new_regime_rate) {
            (Regime::New, Some(rate)) => rate,
            _ => self.rate,
        }
    }
}

/// The complete, versioned ruleset for one assessment period.
///
/// The engine assumes slab bounds and surcharge thresholds are increasing and
/// never checks it; validate before handing a configuration to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfiguration {
    pub version: String,
    pub assessment_year: String,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub new_regime: RegimeRules,
    pub old_regime: RegimeRules,
    pub new_regime_slabs: Vec<Slab>,
    pub old_regime_slabs: OldRegimeSlabs,
    pub deduction_caps: DeductionCaps,
    pub surcharge_tiers: Vec<SurchargeTier>,
    pub cess_rate: Decimal,
}

impl RuleConfiguration {
    pub fn regime(
        &self,
        regime: Regime,
    ) -> &RegimeRules {
        match regime {
            Regime::New => &self.new_regime,
            Regime::Old => &self.old_regime,
        }
    }

    /// True when `date` falls inside the validity window, both ends inclusive.
    pub fn is_effective_on(
        &self,
        date: NaiveDate,
    ) -> bool {
        self.valid_from <= date && date <= self.valid_until
    }
}
