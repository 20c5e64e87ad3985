use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use allocation_core::projection::{self, DEFAULT_HORIZON_YEARS};

/// Arguments for a growth projection
#[derive(Args)]
pub struct ProjectArgs {
    /// Starting amount
    #[arg(long)]
    pub amount: Decimal,

    /// Annual return in percent (e.g. 5.8 for 5.8%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Number of years to project
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    pub years: u32,
}

#[derive(Debug, Serialize)]
struct ProjectionRow {
    year: u32,
    value: Decimal,
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let p = projection::project_growth(args.amount, args.rate, args.years)?;
    let rows: Vec<ProjectionRow> = p
        .years
        .iter()
        .zip(p.values.iter())
        .map(|(&year, &value)| ProjectionRow { year, value })
        .collect();
    Ok(serde_json::to_value(rows)?)
}
