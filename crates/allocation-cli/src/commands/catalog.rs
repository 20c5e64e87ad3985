use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use allocation_core::catalog::{self, AssetClass};

use super::resolve_profile;

/// Arguments for the asset catalog
#[derive(Args)]
pub struct CatalogArgs {
    /// Show only the return column used for this risk profile
    #[arg(long)]
    pub profile: Option<String>,
}

#[derive(Debug, Serialize)]
struct TierRow {
    name: &'static str,
    expected_return: Decimal,
    risk_score: u8,
}

pub fn run_catalog(args: CatalogArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match args.profile {
        Some(ref label) => {
            let profile = resolve_profile(label);
            let rows: Vec<TierRow> = AssetClass::ALL
                .iter()
                .map(|&asset| TierRow {
                    name: asset.name(),
                    expected_return: asset.expected_return(profile),
                    risk_score: asset.risk_score(),
                })
                .collect();
            Ok(serde_json::to_value(rows)?)
        }
        None => Ok(serde_json::to_value(catalog::catalog())?),
    }
}
