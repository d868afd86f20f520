use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Regime;

/// Full tax breakdown for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub regime: Regime,
    pub gross_income: Decimal,
    pub standard_deduction: Decimal,
    /// Chapter VI-A deductions after caps. Always zero in the new regime.
    pub chapter_via_deductions: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    /// Slab tax before rebate, surcharge and cess.
    pub tax_on_income: Decimal,
    pub rebate: Decimal,
    /// Surcharge after its own marginal relief.
    pub surcharge: Decimal,
    /// Rebate relief plus surcharge relief.
    pub marginal_relief: Decimal,
    pub tax_before_cess: Decimal,
    pub cess: Decimal,
    pub total_tax: Decimal,
}

impl TaxResult {
    /// Total tax as a fraction of gross income; zero when there is no income.
    pub fn effective_rate(&self) -> Decimal {
        if self.gross_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.total_tax / self.gross_income
    }
}

/// Which regime the comparison favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    New,
    Old,
    Equal,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Old => "old",
            Self::Equal => "equal",
        }
    }

    /// The recommended regime, or `None` when both cost the same.
    pub fn regime(&self) -> Option<Regime> {
        match self {
            Self::New => Some(Regime::New),
            Self::Old => Some(Regime::Old),
            Self::Equal => None,
        }
    }
}

/// Both regime results side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub new_regime: TaxResult,
    pub old_regime: TaxResult,
    pub recommendation: Recommendation,
    /// Difference between the rounded totals; zero when equal.
    pub savings: Decimal,
}

impl ComparisonResult {
    pub fn result_for(
        &self,
        regime: Regime,
    ) -> &TaxResult {
        match regime {
            Regime::New => &self.new_regime,
            Regime::Old => &self.old_regime,
        }
    }

    /// The cheaper regime's breakdown, if one is strictly cheaper.
    pub fn recommended(&self) -> Option<&TaxResult> {
        self.recommendation
            .regime()
            .map(|regime| self.result_for(regime))
    }
}
