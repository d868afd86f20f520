use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income for the assessment period, split by head of income.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeProfile {
    pub salary: Decimal,
    pub house_property: Decimal,
    pub business: Decimal,
    pub capital_gains: Decimal,
    pub other_sources: Decimal,
}

impl IncomeProfile {
    /// Shorthand for a salaried taxpayer with no other income.
    pub fn salary_only(salary: Decimal) -> Self {
        Self {
            salary,
            ..Self::default()
        }
    }

    /// Sum of every head of income.
    pub fn gross_income(&self) -> Decimal {
        self.salary + self.house_property + self.business + self.capital_gains + self.other_sources
    }
}
