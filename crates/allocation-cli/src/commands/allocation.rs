use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use allocation_core::allocation::{self, AssetData, CustomAllocation};
use allocation_core::analytics;

use super::resolve_profile;
use crate::input;

/// Arguments for the allocation table
#[derive(Args)]
pub struct AllocationArgs {
    /// Risk profile: conservative, balanced, aggressive
    #[arg(long, default_value = "balanced")]
    pub profile: String,
}

/// Arguments for per-asset data
#[derive(Args)]
pub struct AssetsArgs {
    /// Amount of capital to invest
    #[arg(long)]
    pub amount: Decimal,

    /// Risk profile: conservative, balanced, aggressive
    #[arg(long, default_value = "balanced")]
    pub profile: String,

    /// Path to a JSON/YAML custom allocation ({"entries": [{"name", "percentage"}]})
    #[arg(long)]
    pub input: Option<String>,

    /// Append a portfolio total row with blended return and risk
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Serialize)]
struct AllocationRow {
    asset: String,
    percentage: Decimal,
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    name: String,
    percentage: Decimal,
    value: Decimal,
    expected_return: Decimal,
    risk: Decimal,
    expected_annual_income: Decimal,
}

pub fn run_allocation(args: AllocationArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let alloc = allocation::select_allocation(resolve_profile(&args.profile));
    let rows: Vec<AllocationRow> = alloc
        .entries
        .iter()
        .map(|e| AllocationRow {
            asset: e.asset.name().to_string(),
            percentage: e.percentage,
        })
        .collect();
    Ok(serde_json::to_value(rows)?)
}

pub fn run_assets(args: AssetsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = resolve_profile(&args.profile);

    let assets: Vec<AssetData> = if args.input.is_some() {
        let custom: CustomAllocation =
            input::read_typed(&args.input)?.ok_or("--input file is empty")?;
        for name in allocation::unknown_assets(&custom) {
            tracing::warn!(asset = %name, "asset not in catalog, using default return and risk");
        }
        allocation::build_custom_asset_data(args.amount, &custom, profile)?
    } else {
        allocation::build_asset_data(args.amount, profile)?
    };

    if !args.summary {
        return Ok(serde_json::to_value(assets)?);
    }

    let total = SummaryRow {
        name: "Total Portfolio".to_string(),
        percentage: assets.iter().map(|a| a.percentage).sum(),
        value: analytics::total_value(&assets),
        expected_return: analytics::portfolio_return(&assets)?,
        risk: analytics::portfolio_risk(&assets)?,
        expected_annual_income: analytics::expected_annual_income(&assets),
    };

    let mut rows = serde_json::to_value(&assets)?;
    if let Value::Array(ref mut arr) = rows {
        arr.push(serde_json::to_value(total)?);
    }
    Ok(rows)
}
