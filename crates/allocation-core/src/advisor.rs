use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::allocation::{build_asset_data, select_allocation, Allocation, AssetData};
use crate::analytics;
use crate::error::AllocationError;
use crate::profile::RiskProfile;
use crate::projection::{
    self, Milestone, PortfolioProjection, DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS,
};
use crate::types::{validate_amount, with_metadata, ComputationOutput, Money, Percent};
use crate::AllocationResult;

fn default_horizon() -> u32 {
    DEFAULT_HORIZON_YEARS
}

fn default_milestones() -> Vec<u32> {
    vec![5, 10, 20]
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input for a full allocation recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationInput {
    /// Capital to invest (must be > 0)
    pub amount: Money,
    /// Unrecognized labels resolve to `balanced`
    pub risk_profile: RiskProfile,
    #[serde(default = "default_horizon")]
    pub horizon_years: u32,
    #[serde(default = "default_milestones")]
    pub milestone_years: Vec<u32>,
}

impl RecommendationInput {
    pub fn new(amount: Money, risk_profile: RiskProfile) -> Self {
        Self {
            amount,
            risk_profile,
            horizon_years: default_horizon(),
            milestone_years: default_milestones(),
        }
    }
}

/// Allocation, blended statistics and growth projection for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub risk_profile: RiskProfile,
    pub description: String,
    pub allocation: Allocation,
    pub assets: Vec<AssetData>,
    /// Value-weighted expected annual return in percent
    pub portfolio_return: Percent,
    /// Value-weighted risk score, one decimal place
    pub portfolio_risk: Decimal,
    pub expected_annual_income: Money,
    pub projection: PortfolioProjection,
    pub milestones: Vec<Milestone>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Select the profile's allocation, price it for the amount, blend return
/// and risk, and project growth over the horizon.
///
/// Very large amounts can still compound past the range of `Decimal` within
/// the horizon; that surfaces as [`AllocationError::FinancialImpossibility`].
pub fn recommend(
    input: &RecommendationInput,
) -> AllocationResult<ComputationOutput<Recommendation>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    validate_amount(input.amount)?;
    if input.horizon_years > MAX_HORIZON_YEARS {
        return Err(AllocationError::InvalidInput {
            field: "horizon_years".into(),
            reason: format!("Horizon must be at most {MAX_HORIZON_YEARS} years"),
        });
    }

    let profile = input.risk_profile;
    let allocation = select_allocation(profile);
    let assets = build_asset_data(input.amount, profile)?;

    let portfolio_return = analytics::portfolio_return(&assets)?;
    let portfolio_risk = analytics::portfolio_risk(&assets)?;
    let expected_annual_income = analytics::expected_annual_income(&assets);

    let growth = projection::project_growth(input.amount, portfolio_return, input.horizon_years)?;

    let mut requested: Vec<u32> = input.milestone_years.clone();
    requested.sort_unstable();
    requested.dedup();
    for year in requested.iter().filter(|&&y| y > input.horizon_years) {
        warnings.push(format!(
            "Milestone year {year} is beyond the {}-year horizon and was skipped",
            input.horizon_years
        ));
    }
    let milestones = projection::milestones(&growth, input.amount, &requested)?;

    tracing::debug!(
        profile = profile.label(),
        %portfolio_return,
        %portfolio_risk,
        horizon = input.horizon_years,
        "recommendation computed"
    );

    let output = Recommendation {
        risk_profile: profile,
        description: profile.description().to_string(),
        allocation,
        assets,
        portfolio_return,
        portfolio_risk,
        expected_annual_income,
        projection: growth,
        milestones,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed risk-profile allocation, value-weighted blending, constant-rate annual compounding",
        &serde_json::json!({
            "amount": input.amount.to_string(),
            "risk_profile": profile.label(),
            "return_tier": profile.tier(),
            "horizon_years": input.horizon_years,
            "contributions": "none",
        }),
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balanced_recommendation() {
        let out = recommend(&RecommendationInput::new(dec!(10000), RiskProfile::Balanced)).unwrap();
        let rec = &out.result;
        assert_eq!(rec.assets.len(), 7);
        assert_eq!(rec.allocation.total_percentage(), dec!(100));
        assert_eq!(rec.portfolio_return, dec!(5.8));
        assert_eq!(rec.portfolio_risk, dec!(4.5));
        assert_eq!(rec.expected_annual_income, dec!(580));
        assert_eq!(rec.projection.len(), 21);
        assert_eq!(rec.projection.values[0], dec!(10000));
        assert_eq!(rec.milestones.len(), 3);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_milestones_beyond_horizon_warn() {
        let mut input = RecommendationInput::new(dec!(1000), RiskProfile::Aggressive);
        input.horizon_years = 8;
        let out = recommend(&input).unwrap();
        assert_eq!(out.result.projection.len(), 9);
        assert_eq!(out.result.milestones.len(), 1);
        assert_eq!(out.warnings.len(), 2);
    }

    #[test]
    fn test_rejects_zero_amount() {
        let input = RecommendationInput::new(Decimal::ZERO, RiskProfile::Balanced);
        assert!(matches!(
            recommend(&input),
            Err(AllocationError::InvalidInput { ref field, .. }) if field == "amount"
        ));
    }

    #[test]
    fn test_rejects_excessive_horizon() {
        let mut input = RecommendationInput::new(dec!(1000), RiskProfile::Balanced);
        input.horizon_years = MAX_HORIZON_YEARS + 1;
        assert!(recommend(&input).is_err());
    }

    #[test]
    fn test_amount_near_decimal_max() {
        let amount = Decimal::from_i128_with_scale(10_i128.pow(28), 0);
        let mut input = RecommendationInput::new(amount, RiskProfile::Aggressive);
        let out = recommend(&input).unwrap();
        assert_eq!(out.result.projection.values[0], amount);

        // 9.725% a year passes Decimal::MAX in year 23
        input.horizon_years = 30;
        assert!(matches!(
            recommend(&input),
            Err(AllocationError::FinancialImpossibility(_))
        ));
    }

    #[test]
    fn test_input_defaults_from_json() {
        let input: RecommendationInput =
            serde_json::from_str(r#"{"amount": "2500", "risk_profile": "moderate"}"#).unwrap();
        assert_eq!(input.risk_profile, RiskProfile::Balanced);
        assert_eq!(input.horizon_years, 20);
        assert_eq!(input.milestone_years, vec![5, 10, 20]);
    }
}
