use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::allocation::tables::{select_allocation, CustomAllocation};
use crate::catalog::{self, AssetClass};
use crate::profile::RiskProfile;
use crate::types::{validate_amount, Money, Percent};
use crate::AllocationResult;

/// Per-asset breakdown of an allocation for a given amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetData {
    pub name: String,
    /// Share of the portfolio in percent
    pub percentage: Percent,
    /// Monetary value: percentage / 100 * amount
    pub value: Money,
    /// Annual expected return in percent at the profile's tier
    pub expected_return: Percent,
    /// Risk score (1-10)
    pub risk: u8,
    /// value * expected_return / 100
    pub expected_annual_income: Money,
}

/// Percentages are turned into fractions before scaling, so a share of at
/// most 100% never pushes the value past `amount` and cannot overflow.
fn asset_row(
    name: String,
    percentage: Percent,
    amount: Money,
    expected_return: Percent,
    risk: u8,
) -> AssetData {
    let value = amount * (percentage / dec!(100));
    AssetData {
        name,
        percentage,
        value,
        expected_return,
        risk,
        expected_annual_income: value * (expected_return / dec!(100)),
    }
}

/// Split `amount` across the profile's fixed allocation table, in table
/// order, attaching the catalog estimates for the profile's tier.
pub fn build_asset_data(amount: Money, profile: RiskProfile) -> AllocationResult<Vec<AssetData>> {
    validate_amount(amount)?;

    let allocation = select_allocation(profile);
    tracing::debug!(
        profile = profile.label(),
        assets = allocation.len(),
        %amount,
        "building asset data"
    );

    Ok(allocation
        .entries
        .iter()
        .map(|entry| {
            let asset: AssetClass = entry.asset;
            asset_row(
                asset.name().to_string(),
                entry.percentage,
                amount,
                asset.expected_return(profile),
                asset.risk_score(),
            )
        })
        .collect())
}

/// Same as [`build_asset_data`] for a caller-supplied table. Names missing
/// from the catalog take the default return and risk instead of failing;
/// [`unknown_assets`] lists them for the caller to report.
pub fn build_custom_asset_data(
    amount: Money,
    allocation: &CustomAllocation,
    profile: RiskProfile,
) -> AllocationResult<Vec<AssetData>> {
    validate_amount(amount)?;
    allocation.validate()?;

    Ok(allocation
        .entries
        .iter()
        .map(|entry| {
            let hit = catalog::lookup(&entry.name, profile);
            asset_row(
                entry.name.clone(),
                entry.percentage,
                amount,
                hit.expected_return,
                hit.risk_score,
            )
        })
        .collect())
}

/// Names in a custom allocation that the catalog does not know.
pub fn unknown_assets(allocation: &CustomAllocation) -> Vec<String> {
    allocation
        .entries
        .iter()
        .filter(|e| AssetClass::from_name(&e.name).is_none())
        .map(|e| e.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::tables::CustomAllocationEntry;
    use rust_decimal::Decimal;

    #[test]
    fn test_balanced_values_for_10000() {
        let assets = build_asset_data(dec!(10000), RiskProfile::Balanced).unwrap();
        assert_eq!(assets.len(), 7);
        let large_cap = assets.iter().find(|a| a.name == "Large Cap Stocks").unwrap();
        assert_eq!(large_cap.value, dec!(2500));
        assert_eq!(large_cap.expected_return, dec!(7.0));
        assert_eq!(large_cap.risk, 5);
        assert_eq!(large_cap.expected_annual_income, dec!(175));
    }

    #[test]
    fn test_values_sum_to_amount() {
        for profile in RiskProfile::ALL {
            let assets = build_asset_data(dec!(12345.67), profile).unwrap();
            let total: Decimal = assets.iter().map(|a| a.value).sum();
            assert_eq!(total, dec!(12345.67), "{profile}");
        }
    }

    #[test]
    fn test_conservative_uses_tier_zero() {
        let assets = build_asset_data(dec!(1000), RiskProfile::Conservative).unwrap();
        let gov = &assets[0];
        assert_eq!(gov.name, "Government Bonds");
        assert_eq!(gov.expected_return, dec!(1.5));
        assert_eq!(gov.value, dec!(300));
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(build_asset_data(Decimal::ZERO, RiskProfile::Balanced).is_err());
        assert!(build_asset_data(dec!(-5), RiskProfile::Aggressive).is_err());
    }

    #[test]
    fn test_custom_allocation_unknown_asset_defaults() {
        let custom = CustomAllocation {
            entries: vec![
                CustomAllocationEntry {
                    name: "Commodities".into(),
                    percentage: dec!(40),
                },
                CustomAllocationEntry {
                    name: "Bitcoin".into(),
                    percentage: dec!(60),
                },
            ],
        };
        // aggressive Commodities (8.0) differs from the 5.0 default
        let assets = build_custom_asset_data(dec!(1000), &custom, RiskProfile::Aggressive).unwrap();
        assert_eq!(assets[0].expected_return, dec!(8.0));
        assert_eq!(assets[0].risk, 7);
        assert_eq!(assets[1].expected_return, dec!(5.0));
        assert_eq!(assets[1].risk, 5);
        assert_eq!(assets[1].value, dec!(600));
        assert_eq!(unknown_assets(&custom), vec!["Bitcoin".to_string()]);
    }

    #[test]
    fn test_amounts_near_decimal_max_do_not_overflow() {
        let amount = Decimal::from_i128_with_scale(5 * 10_i128.pow(27), 0);
        let assets = build_asset_data(amount, RiskProfile::Conservative).unwrap();
        let total: Decimal = assets.iter().map(|a| a.value).sum();
        assert_eq!(total, amount);

        for profile in RiskProfile::ALL {
            let assets = build_asset_data(Decimal::MAX, profile).unwrap();
            assert!(assets.iter().all(|a| a.value <= Decimal::MAX));
        }
    }

    #[test]
    fn test_custom_allocation_matches_fixed_table() {
        let fixed = select_allocation(RiskProfile::Aggressive);
        let custom = CustomAllocation::from(&fixed);
        let a = build_asset_data(dec!(5000), RiskProfile::Aggressive).unwrap();
        let b = build_custom_asset_data(dec!(5000), &custom, RiskProfile::Aggressive).unwrap();
        assert_eq!(a, b);
    }
}
