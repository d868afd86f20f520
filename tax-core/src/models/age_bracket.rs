use std::fmt;

use serde::{Deserialize, Serialize};

/// Age of the taxpayer during the assessment period.
///
/// Selects the width of the zero-rate band in the old regime and which
/// savings-interest deduction applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgeBracket {
    #[default]
    #[serde(rename = "below60")]
    Below60,
    #[serde(rename = "60to80")]
    From60To80,
    #[serde(rename = "above80")]
    Above80,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 3] = [
        AgeBracket::Below60,
        AgeBracket::From60To80,
        AgeBracket::Above80,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "below60",
            Self::From60To80 => "60to80",
            Self::Above80 => "above80",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "below60" => Some(Self::Below60),
            "60to80" => Some(Self::From60To80),
            "above80" => Some(Self::Above80),
            _ => None,
        }
    }

    /// True for the 60-to-80 and above-80 brackets.
    pub fn is_senior(&self) -> bool {
        !matches!(self, Self::Below60)
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
