pub mod allocation;
pub mod catalog;
pub mod projection;
pub mod recommend;

use allocation_core::RiskProfile;

/// Resolve a `--profile` flag. Unrecognized labels fall back to balanced
/// (the core logs a warning).
pub(crate) fn resolve_profile(label: &str) -> RiskProfile {
    RiskProfile::resolve(label)
}
