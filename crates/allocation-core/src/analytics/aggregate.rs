use rust_decimal::Decimal;

use crate::allocation::AssetData;
use crate::error::AllocationError;
use crate::types::{round_half_up, Money, Percent};
use crate::AllocationResult;

/// Sum of the asset values.
pub fn total_value(assets: &[AssetData]) -> Money {
    assets.iter().map(|a| a.value).sum()
}

fn nonzero_total(assets: &[AssetData], context: &str) -> AllocationResult<Money> {
    let total = total_value(assets);
    if total.is_zero() {
        return Err(AllocationError::DivisionByZero {
            context: format!("{context}: total portfolio value is zero"),
        });
    }
    Ok(total)
}

/// Value-weighted average expected return, in percent, unrounded.
///
/// return = Σ (value_i / total) * expected_return_i
pub fn portfolio_return(assets: &[AssetData]) -> AllocationResult<Percent> {
    let total = nonzero_total(assets, "portfolio return")?;
    Ok(assets
        .iter()
        .map(|a| (a.value / total) * a.expected_return)
        .sum())
}

/// Value-weighted average risk score, rounded to one decimal place.
pub fn portfolio_risk(assets: &[AssetData]) -> AllocationResult<Decimal> {
    let total = nonzero_total(assets, "portfolio risk")?;
    let weighted: Decimal = assets
        .iter()
        .map(|a| (a.value / total) * Decimal::from(a.risk))
        .sum();
    Ok(round_half_up(weighted, 1))
}

/// Expected first-year income across all assets.
pub fn expected_annual_income(assets: &[AssetData]) -> Money {
    assets.iter().map(|a| a.expected_annual_income).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::build_asset_data;
    use crate::profile::RiskProfile;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balanced_blended_return() {
        // 0.15*2.5 + 0.15*4.0 + 0.25*7.0 + 0.10*8.0 + 0.15*7.5 + 0.10*6.0 + 0.10*5.5
        let assets = build_asset_data(dec!(10000), RiskProfile::Balanced).unwrap();
        assert_eq!(portfolio_return(&assets).unwrap(), dec!(5.8));
    }

    #[test]
    fn test_conservative_blended_return() {
        // 0.30*1.5 + 0.20*3.0 + 0.15*5.0 + 0.10*5.5 + 0.15*1.0 + 0.10*0.5 = 2.55
        let assets = build_asset_data(dec!(1000), RiskProfile::Conservative).unwrap();
        assert_eq!(portfolio_return(&assets).unwrap(), dec!(2.55));
    }

    #[test]
    fn test_aggressive_blended_return() {
        // 0.10*5 + 0.25*9 + 0.15*10 + 0.15*12 + 0.15*10.5 + 0.10*13 + 0.10*8 = 9.725
        let assets = build_asset_data(dec!(1000), RiskProfile::Aggressive).unwrap();
        assert_eq!(portfolio_return(&assets).unwrap(), dec!(9.725));
    }

    #[test]
    fn test_blended_risk_rounded() {
        // conservative: 0.3*2 + 0.2*3 + 0.15*5 + 0.1*6 + 0.15*2 + 0.1*1 = 2.95 -> 3.0
        let assets = build_asset_data(dec!(1000), RiskProfile::Conservative).unwrap();
        assert_eq!(portfolio_risk(&assets).unwrap(), dec!(3.0));

        // balanced: 0.15*2 + 0.15*3 + 0.25*5 + 0.1*6 + 0.15*6 + 0.1*6 + 0.1*4 = 4.5
        let assets = build_asset_data(dec!(1000), RiskProfile::Balanced).unwrap();
        assert_eq!(portfolio_risk(&assets).unwrap(), dec!(4.5));

        // aggressive: 0.1*3 + 0.25*5 + 0.15*6 + 0.15*7 + 0.15*6 + 0.1*8 + 0.1*6 = 5.8
        let assets = build_asset_data(dec!(1000), RiskProfile::Aggressive).unwrap();
        assert_eq!(portfolio_risk(&assets).unwrap(), dec!(5.8));
    }

    #[test]
    fn test_expected_annual_income() {
        let assets = build_asset_data(dec!(10000), RiskProfile::Balanced).unwrap();
        assert_eq!(expected_annual_income(&assets), dec!(580));
    }

    #[test]
    fn test_empty_assets_is_division_by_zero() {
        assert!(matches!(
            portfolio_return(&[]),
            Err(AllocationError::DivisionByZero { .. })
        ));
        assert!(portfolio_risk(&[]).is_err());
    }
}
