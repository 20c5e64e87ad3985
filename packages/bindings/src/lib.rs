use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use allocation_core::allocation::{self, CustomAllocation};
use allocation_core::projection::DEFAULT_HORIZON_YEARS;
use allocation_core::RiskProfile;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn default_years() -> u32 {
    DEFAULT_HORIZON_YEARS
}

#[derive(Deserialize)]
struct ProfileRequest {
    risk_profile: RiskProfile,
}

#[derive(Deserialize)]
struct AssetDataRequest {
    amount: Decimal,
    risk_profile: RiskProfile,
    #[serde(default)]
    allocation: Option<CustomAllocation>,
}

#[derive(Deserialize)]
struct ProjectionRequest {
    amount: Decimal,
    annual_return: Decimal,
    #[serde(default = "default_years")]
    years: u32,
}

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

#[napi]
pub fn select_allocation(input_json: String) -> NapiResult<String> {
    let req: ProfileRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = allocation::select_allocation(req.risk_profile);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_asset_data(input_json: String) -> NapiResult<String> {
    let req: AssetDataRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = match req.allocation {
        Some(ref custom) => {
            allocation::build_custom_asset_data(req.amount, custom, req.risk_profile)
        }
        None => allocation::build_asset_data(req.amount, req.risk_profile),
    }
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn asset_catalog() -> NapiResult<String> {
    serde_json::to_string(&allocation_core::catalog::catalog()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn project_growth(input_json: String) -> NapiResult<String> {
    let req: ProjectionRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        allocation_core::projection::project_growth(req.amount, req.annual_return, req.years)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Advisor
// ---------------------------------------------------------------------------

#[napi]
pub fn recommend(input_json: String) -> NapiResult<String> {
    let input: allocation_core::advisor::RecommendationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = allocation_core::advisor::recommend(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
