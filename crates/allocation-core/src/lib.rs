pub mod allocation;
pub mod analytics;
pub mod catalog;
pub mod error;
pub mod profile;
pub mod types;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "advisor")]
pub mod advisor;

pub use error::AllocationError;
pub use profile::RiskProfile;
pub use types::*;

/// Standard result type for all allocation operations
pub type AllocationResult<T> = Result<T, AllocationError>;
