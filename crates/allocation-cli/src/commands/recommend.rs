use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use allocation_core::advisor::{self, RecommendationInput};
use allocation_core::projection::DEFAULT_HORIZON_YEARS;

use super::resolve_profile;
use crate::input;

/// Arguments for a full recommendation
#[derive(Args)]
pub struct RecommendArgs {
    /// Path to JSON/YAML input file (overrides the flags below)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount of capital to invest
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Risk profile: conservative, balanced, aggressive
    #[arg(long, default_value = "balanced")]
    pub profile: String,

    /// Projection horizon in years
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    pub horizon: u32,

    /// Comma-separated milestone years (e.g. "5,10,20")
    #[arg(long, value_delimiter = ',')]
    pub milestones: Option<Vec<u32>>,
}

pub fn run_recommend(args: RecommendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rec_input: RecommendationInput = if args.input.is_some() {
        input::read_typed(&args.input)?.ok_or("--input file is empty")?
    } else if let Some(amount) = args.amount {
        let mut built = RecommendationInput::new(amount, resolve_profile(&args.profile));
        built.horizon_years = args.horizon;
        if let Some(years) = args.milestones {
            built.milestone_years = years;
        }
        built
    } else if let Some(piped) = input::read_typed(&None)? {
        piped
    } else {
        return Err("Provide --amount, --input <file> or pipe JSON via stdin".into());
    };

    tracing::debug!(
        amount = %rec_input.amount,
        profile = %rec_input.risk_profile,
        horizon = rec_input.horizon_years,
        "running recommendation"
    );
    let result = advisor::recommend(&rec_input)?;
    Ok(serde_json::to_value(result)?)
}
