use allocation_core::advisor::{recommend, RecommendationInput};
use allocation_core::allocation::{self, AssetData};
use allocation_core::analytics;
use allocation_core::catalog::AssetClass;
use allocation_core::projection::{self, DEFAULT_HORIZON_YEARS};
use allocation_core::RiskProfile;
use pretty_assertions::assert_eq;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

fn assets_for(amount: Decimal, profile: RiskProfile) -> Vec<AssetData> {
    allocation::build_asset_data(amount, profile).unwrap()
}

// ---------------------------------------------------------------------------
// Allocation tables
// ---------------------------------------------------------------------------

#[test]
fn test_every_profile_sums_to_exactly_100() {
    for profile in RiskProfile::ALL {
        let alloc = allocation::select_allocation(profile);
        assert_eq!(alloc.total_percentage(), dec!(100), "{profile}");
    }
}

#[test]
fn test_balanced_table_contents() {
    let alloc = allocation::select_allocation(RiskProfile::Balanced);
    let rows: Vec<(AssetClass, Decimal)> = alloc
        .entries
        .iter()
        .map(|e| (e.asset, e.percentage))
        .collect();
    assert_eq!(
        rows,
        vec![
            (AssetClass::GovernmentBonds, dec!(15)),
            (AssetClass::CorporateBonds, dec!(15)),
            (AssetClass::LargeCapStocks, dec!(25)),
            (AssetClass::MidCapStocks, dec!(10)),
            (AssetClass::InternationalStocks, dec!(15)),
            (AssetClass::RealEstate, dec!(10)),
            (AssetClass::HighYieldBonds, dec!(10)),
        ]
    );
}

// ---------------------------------------------------------------------------
// Asset data
// ---------------------------------------------------------------------------

#[test]
fn test_asset_values_sum_to_amount() {
    for amount in [dec!(1), dec!(999.99), dec!(10000), dec!(2500000.50)] {
        for profile in RiskProfile::ALL {
            let total = analytics::total_value(&assets_for(amount, profile));
            assert_eq!(total, amount, "{profile} @ {amount}");
        }
    }
}

#[test]
fn test_balanced_10000_scenario() {
    let assets = assets_for(dec!(10000), RiskProfile::Balanced);
    assert_eq!(assets.len(), 7);

    let large_cap = assets
        .iter()
        .find(|a| a.name == "Large Cap Stocks")
        .unwrap();
    assert_eq!(large_cap.value, dec!(2500));

    let returns: Vec<Decimal> = assets.iter().map(|a| a.expected_return).collect();
    assert_eq!(
        returns,
        vec![dec!(2.5), dec!(4.0), dec!(7.0), dec!(8.0), dec!(7.5), dec!(6.0), dec!(5.5)]
    );

    // Σ weight * return over the tier-1 column
    assert_eq!(analytics::portfolio_return(&assets).unwrap(), dec!(5.8));
}

#[test]
fn test_unknown_profile_label_resolves_to_balanced_everywhere() {
    let profile = RiskProfile::resolve("moderate");
    let fallback = assets_for(dec!(10000), profile);
    let balanced = assets_for(dec!(10000), RiskProfile::Balanced);
    assert_eq!(fallback, balanced);
    // tier 1 column, not the aggressive one
    assert_eq!(fallback[2].expected_return, dec!(7.0));
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[test]
fn test_portfolio_return_scale_invariant() {
    for profile in RiskProfile::ALL {
        let small = analytics::portfolio_return(&assets_for(dec!(100), profile)).unwrap();
        let large = analytics::portfolio_return(&assets_for(dec!(7654321), profile)).unwrap();
        assert!(
            (small - large).abs() < dec!(0.0000000001),
            "{profile}: {small} vs {large}"
        );
    }
}

#[test]
fn test_portfolio_risk_one_decimal_in_range() {
    for profile in RiskProfile::ALL {
        let risk = analytics::portfolio_risk(&assets_for(dec!(4321.09), profile)).unwrap();
        assert!(risk >= dec!(1) && risk <= dec!(10), "{profile}: {risk}");
        assert_eq!(risk, risk.round_dp(1), "{profile}: {risk}");
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[test]
fn test_projection_recurrence() {
    let amount = dec!(12345.67);
    let rate = dec!(6.35);
    let p = projection::project_growth(amount, rate, DEFAULT_HORIZON_YEARS).unwrap();
    assert_eq!(p.len(), DEFAULT_HORIZON_YEARS as usize + 1);

    let factor = Decimal::ONE + rate / dec!(100);
    let mut running = amount;
    for (i, value) in p.values.iter().enumerate() {
        assert_eq!(p.years[i], i as u32);
        assert_eq!(
            *value,
            running.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        );
        running *= factor;
    }
}

#[test]
fn test_conservative_1000_one_year() {
    let assets = assets_for(dec!(1000), RiskProfile::Conservative);
    let r = analytics::portfolio_return(&assets).unwrap();
    let p = projection::project_growth(dec!(1000), r, 1).unwrap();
    assert_eq!(p.values[0], dec!(1000));
    assert_eq!(
        p.values[1],
        (dec!(1000) * (Decimal::ONE + r / dec!(100)))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    );
}

// ---------------------------------------------------------------------------
// Full recommendation
// ---------------------------------------------------------------------------

#[test]
fn test_recommendation_envelope_serializes() {
    let out = recommend(&RecommendationInput::new(dec!(50000), RiskProfile::Aggressive)).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["risk_profile"], "aggressive");
    assert_eq!(json["result"]["assets"].as_array().unwrap().len(), 7);
    assert_eq!(json["result"]["projection"]["years"].as_array().unwrap().len(), 21);
    assert_eq!(
        json["result"]["allocation"]["entries"][5]["asset"],
        "Emerging Markets"
    );
    assert_eq!(json["metadata"]["precision"], "rust_decimal_128bit");
}

#[test]
fn test_recommendation_from_json_with_unknown_profile() {
    let json = r#"{"amount": "10000", "risk_profile": "moderate", "horizon_years": 10}"#;
    let input: RecommendationInput = serde_json::from_str(json).unwrap();
    let out = recommend(&input).unwrap();
    assert_eq!(out.result.risk_profile, RiskProfile::Balanced);
    assert_eq!(out.result.portfolio_return, dec!(5.8));
    assert_eq!(out.result.projection.len(), 11);
    assert_eq!(out.warnings.len(), 1);
}
