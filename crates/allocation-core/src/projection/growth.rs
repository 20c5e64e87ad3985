use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AllocationError;
use crate::types::{round_half_up, validate_amount, Money, Percent};
use crate::AllocationResult;

/// Default projection horizon in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 20;

/// Longest horizon `project_growth` accepts.
pub const MAX_HORIZON_YEARS: u32 = 100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Year-indexed projected values. `years` and `values` are parallel and
/// both have horizon + 1 entries (year 0 is the starting amount).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProjection {
    pub years: Vec<u32>,
    pub values: Vec<Money>,
}

/// Projected value at a given year relative to the starting amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: u32,
    pub value: Money,
    /// value - amount
    pub gain: Money,
    /// (value / amount - 1) * 100, one decimal place
    pub growth_pct: Percent,
}

impl PortfolioProjection {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn value_at(&self, year: u32) -> Option<Money> {
        self.values.get(year as usize).copied()
    }
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Compound `amount` at a constant annual rate for `years` years.
///
/// Each recorded value is rounded to a whole unit, but compounding carries
/// the unrounded running value forward, so rounding never accumulates.
/// A running value that leaves the Decimal range is an error, not a panic.
pub fn project_growth(
    amount: Money,
    annual_return_pct: Percent,
    years: u32,
) -> AllocationResult<PortfolioProjection> {
    validate_amount(amount)?;
    if years > MAX_HORIZON_YEARS {
        return Err(AllocationError::InvalidInput {
            field: "years".into(),
            reason: format!("Horizon must be at most {MAX_HORIZON_YEARS} years, got {years}"),
        });
    }

    let growth_factor = Decimal::ONE + annual_return_pct / dec!(100);
    let mut year_labels = Vec::with_capacity(years as usize + 1);
    let mut year_values = Vec::with_capacity(years as usize + 1);

    let mut current = amount;
    for year in 0..=years {
        year_labels.push(year);
        year_values.push(round_half_up(current, 0));
        if year == years {
            break;
        }
        current = current.checked_mul(growth_factor).ok_or_else(|| {
            AllocationError::FinancialImpossibility(format!(
                "Projected value of {amount} at {annual_return_pct}% exceeds the \
                 representable range after {} years",
                year + 1
            ))
        })?;
    }

    tracing::debug!(
        %amount,
        %annual_return_pct,
        years,
        "projected portfolio growth"
    );

    Ok(PortfolioProjection {
        years: year_labels,
        values: year_values,
    })
}

/// Milestone summaries for the requested years. Years past the end of the
/// projection are skipped.
pub fn milestones(
    projection: &PortfolioProjection,
    amount: Money,
    at_years: &[u32],
) -> AllocationResult<Vec<Milestone>> {
    validate_amount(amount)?;

    let mut out = Vec::with_capacity(at_years.len());
    for &year in at_years {
        let Some(value) = projection.value_at(year) else {
            continue;
        };
        let out_of_range = || {
            AllocationError::FinancialImpossibility(format!(
                "Growth of year {year} value {value} over {amount} is out of range"
            ))
        };
        let gain = value.checked_sub(amount).ok_or_else(out_of_range)?;
        let growth_pct = value
            .checked_div(amount)
            .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
            .and_then(|excess| excess.checked_mul(dec!(100)))
            .ok_or_else(out_of_range)?;
        out.push(Milestone {
            year,
            value,
            gain,
            growth_pct: round_half_up(growth_pct, 1),
        });
    }
    Ok(out)
}
