//! Collaborators around the `tax-core` engine: rule files, the built-in
//! ruleset, profile CSVs and logging setup for the `tax-regime` tool.

pub mod defaults;
pub mod logging;
pub mod profiles;
pub mod report;
pub mod rules;
pub mod validate;

pub use profiles::{ProfileLoadError, TaxpayerProfile};
pub use rules::{LoadedRules, RuleLoadError, RuleLoader, RuleSource};
pub use validate::{RuleConfigError, validate_rules};
