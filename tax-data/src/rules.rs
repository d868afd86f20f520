//! Loading rule configurations from TOML files.
//!
//! ## File format
//!
//! Decimal values may be written as integers or quoted strings (`"0.05"`);
//! dates are quoted `YYYY-MM-DD` strings. Slabs without `upper_bound` are
//! unbounded.
//!
//! ```toml
//! version = "FY2025-26"
//! assessment_year = "2026-27"
//! valid_from = "2025-04-01"
//! valid_until = "2026-03-31"
//! cess_rate = "0.04"
//!
//! [new_regime]
//! standard_deduction = 75000
//! rebate = { threshold = 1200000, marginal_relief = true }
//!
//! [[new_regime_slabs]]
//! upper_bound = 400000
//! rate = "0"
//!
//! [[new_regime_slabs]]
//! rate = "0.30"
//!
//! [[surcharge_tiers]]
//! threshold = 50000000
//! rate = "0.37"
//! new_regime_rate = "0.25"
//! ```

use std::path::{Path, PathBuf};

use tax_core::RuleConfiguration;
use thiserror::Error;
use tracing::{info, warn};

use crate::defaults;
use crate::validate::{RuleConfigError, validate_rules};

/// Errors that can occur while loading a rule file.
#[derive(Debug, Error)]
pub enum RuleLoadError {
    #[error("cannot read rule file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid rule configuration: {0}")]
    Invalid(#[from] RuleConfigError),
}

/// Where a loaded ruleset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    File(PathBuf),
    /// The built-in ruleset, with the reason no file was used.
    Fallback { reason: String },
}

/// A validated ruleset and its origin.
#[derive(Debug, Clone)]
pub struct LoadedRules {
    pub rules: RuleConfiguration,
    pub source: RuleSource,
}

impl LoadedRules {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, RuleSource::Fallback { .. })
    }
}

/// Reads rule configurations and validates them before use.
pub struct RuleLoader;

impl RuleLoader {
    /// Parses and validates a ruleset from TOML text.
    pub fn parse(input: &str) -> Result<RuleConfiguration, RuleLoadError> {
        let rules: RuleConfiguration = toml::from_str(input)?;
        validate_rules(&rules)?;
        Ok(rules)
    }

    /// Reads, parses and validates a rule file.
    pub fn load_from_file(path: &Path) -> Result<RuleConfiguration, RuleLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RuleLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Loads `path` when given, falling back to the built-in ruleset when no
    /// path is given or the file cannot be used.
    ///
    /// A failed load is logged and reported through [`RuleSource::Fallback`]
    /// rather than returned as an error.
    pub fn load_or_fallback(path: Option<&Path>) -> LoadedRules {
        let Some(path) = path else {
            return Self::fallback("no rule file given".to_string());
        };

        match Self::load_from_file(path) {
            Ok(rules) => {
                info!(
                    path = %path.display(),
                    version = %rules.version,
                    "loaded rule configuration"
                );
                LoadedRules {
                    rules,
                    source: RuleSource::File(path.to_path_buf()),
                }
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    %error,
                    "could not load rule configuration; using built-in rules"
                );
                Self::fallback(error.to_string())
            }
        }
    }

    fn fallback(reason: String) -> LoadedRules {
        LoadedRules {
            rules: defaults::fy2025_26(),
            source: RuleSource::Fallback { reason },
        }
    }
}
