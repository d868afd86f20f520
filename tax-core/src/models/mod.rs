mod age_bracket;
mod deduction_profile;
mod income_profile;
mod regime;
mod rule_configuration;
mod tax_result;

pub use age_bracket::AgeBracket;
pub use deduction_profile::DeductionProfile;
pub use income_profile::IncomeProfile;
pub use regime::Regime;
pub use rule_configuration::{
    DeductionCaps, OldRegimeSlabs, RebateRule, RegimeRules, RuleConfiguration, Slab,
    SurchargeTier,
};
pub use tax_result::{ComparisonResult, Recommendation, TaxResult};
