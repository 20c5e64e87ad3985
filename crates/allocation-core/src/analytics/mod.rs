pub mod aggregate;

pub use aggregate::{expected_annual_income, portfolio_return, portfolio_risk, total_value};
