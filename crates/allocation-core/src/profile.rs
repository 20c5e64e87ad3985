use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AllocationError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Investor risk preference. Selects both the allocation table and the
/// column of the asset catalog used for expected returns.
///
/// Deserialization is lenient: any label that is not one of the three
/// profiles resolves to `Balanced` (see [`RiskProfile::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Conservative,
        RiskProfile::Balanced,
        RiskProfile::Aggressive,
    ];

    /// Index into an asset's return range (0 = conservative, 2 = aggressive).
    pub fn tier(self) -> usize {
        match self {
            RiskProfile::Conservative => 0,
            RiskProfile::Balanced => 1,
            RiskProfile::Aggressive => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Balanced => "balanced",
            RiskProfile::Aggressive => "aggressive",
        }
    }

    /// One-sentence summary of the strategy behind the profile's table.
    pub fn description(self) -> &'static str {
        match self {
            RiskProfile::Conservative => {
                "This conservative allocation prioritizes capital preservation with steady, modest returns."
            }
            RiskProfile::Balanced => {
                "This balanced approach aims for moderate growth while managing volatility."
            }
            RiskProfile::Aggressive => {
                "This aggressive strategy focuses on maximizing growth potential with higher risk tolerance."
            }
        }
    }

    /// Strict parse of a profile label (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse_label(label: &str) -> Option<RiskProfile> {
        match label.trim().to_lowercase().as_str() {
            "conservative" => Some(RiskProfile::Conservative),
            "balanced" => Some(RiskProfile::Balanced),
            "aggressive" => Some(RiskProfile::Aggressive),
            _ => None,
        }
    }

    /// Total resolution of a caller-supplied label. Unrecognized labels fall
    /// back to `Balanced` for both the allocation table and the return tier.
    pub fn resolve(label: &str) -> RiskProfile {
        match Self::parse_label(label) {
            Some(profile) => profile,
            None => {
                tracing::warn!(label, "unrecognized risk profile, using balanced");
                RiskProfile::Balanced
            }
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskProfile {
    type Err = AllocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| AllocationError::InvalidInput {
            field: "risk_profile".into(),
            reason: format!("Unknown risk profile '{s}'. Use: conservative, balanced, aggressive"),
        })
    }
}

impl From<String> for RiskProfile {
    fn from(label: String) -> Self {
        RiskProfile::resolve(&label)
    }
}
