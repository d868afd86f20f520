use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two mutually exclusive sets of tax rules a taxpayer can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Lower rates, standard deduction only.
    New,
    /// Higher rates, Chapter VI-A deductions allowed.
    Old,
}

impl Regime {
    pub const ALL: [Regime; 2] = [Regime::New, Regime::Old];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Old => "old",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "old" => Some(Self::Old),
            _ => None,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
