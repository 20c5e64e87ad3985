use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::catalog::AssetClass;
use crate::error::AllocationError;
use crate::profile::RiskProfile;
use crate::types::Percent;
use crate::AllocationResult;

const FULL_ALLOCATION: Percent = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One asset's share of a fixed allocation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    pub asset: AssetClass,
    pub percentage: Percent,
}

/// Percentage breakdown for a risk profile, in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub profile: RiskProfile,
    pub entries: Vec<AllocationEntry>,
}

/// A caller-supplied entry. The name need not exist in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAllocationEntry {
    pub name: String,
    pub percentage: Percent,
}

/// A caller-supplied allocation table, used to extend beyond the three
/// fixed tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAllocation {
    pub entries: Vec<CustomAllocationEntry>,
}

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

const CONSERVATIVE: &[(AssetClass, Percent)] = &[
    (AssetClass::GovernmentBonds, dec!(30)),
    (AssetClass::CorporateBonds, dec!(20)),
    (AssetClass::LargeCapStocks, dec!(15)),
    (AssetClass::InternationalStocks, dec!(10)),
    (AssetClass::Tips, dec!(15)),
    (AssetClass::Cash, dec!(10)),
];

const BALANCED: &[(AssetClass, Percent)] = &[
    (AssetClass::GovernmentBonds, dec!(15)),
    (AssetClass::CorporateBonds, dec!(15)),
    (AssetClass::LargeCapStocks, dec!(25)),
    (AssetClass::MidCapStocks, dec!(10)),
    (AssetClass::InternationalStocks, dec!(15)),
    (AssetClass::RealEstate, dec!(10)),
    (AssetClass::HighYieldBonds, dec!(10)),
];

const AGGRESSIVE: &[(AssetClass, Percent)] = &[
    (AssetClass::CorporateBonds, dec!(10)),
    (AssetClass::LargeCapStocks, dec!(25)),
    (AssetClass::MidCapStocks, dec!(15)),
    (AssetClass::SmallCapStocks, dec!(15)),
    (AssetClass::InternationalStocks, dec!(15)),
    (AssetClass::EmergingMarkets, dec!(10)),
    (AssetClass::RealEstate, dec!(10)),
];

fn table(profile: RiskProfile) -> &'static [(AssetClass, Percent)] {
    match profile {
        RiskProfile::Conservative => CONSERVATIVE,
        RiskProfile::Balanced => BALANCED,
        RiskProfile::Aggressive => AGGRESSIVE,
    }
}

/// Fixed allocation table for a risk profile. Labels that do not name a
/// profile reach this function as `Balanced` via [`RiskProfile::resolve`].
pub fn select_allocation(profile: RiskProfile) -> Allocation {
    let entries = table(profile)
        .iter()
        .map(|&(asset, percentage)| AllocationEntry { asset, percentage })
        .collect();
    Allocation { profile, entries }
}

impl Allocation {
    pub fn total_percentage(&self) -> Percent {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&Allocation> for CustomAllocation {
    fn from(allocation: &Allocation) -> Self {
        CustomAllocation {
            entries: allocation
                .entries
                .iter()
                .map(|e| CustomAllocationEntry {
                    name: e.asset.name().to_string(),
                    percentage: e.percentage,
                })
                .collect(),
        }
    }
}

impl CustomAllocation {
    pub fn total_percentage(&self) -> Percent {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    /// Each percentage must lie in [0, 100] and the table must total 100.
    pub fn validate(&self) -> AllocationResult<()> {
        if self.entries.is_empty() {
            return Err(AllocationError::InvalidInput {
                field: "entries".into(),
                reason: "Allocation must contain at least one asset".into(),
            });
        }
        for entry in &self.entries {
            if entry.percentage < Decimal::ZERO || entry.percentage > FULL_ALLOCATION {
                return Err(AllocationError::InvalidInput {
                    field: format!("entries.{}", entry.name),
                    reason: format!(
                        "Percentage must be between 0 and 100, got {}",
                        entry.percentage
                    ),
                });
            }
        }
        let total = self.total_percentage();
        if total != FULL_ALLOCATION {
            return Err(AllocationError::InvalidInput {
                field: "entries".into(),
                reason: format!("Percentages must sum to 100, got {total}"),
            });
        }
        Ok(())
    }
}
