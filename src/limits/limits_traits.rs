use chrono::NaiveDate;

use super::limits_model::{PersonalAttributes, PersonalLimits};

/// Trait defining the contract for the personal limits service.
///
/// Both operations are deterministic, side-effect free, and never fail for
/// numerically finite input: out-of-range results are clamped, not rejected.
pub trait PersonalLimitsServiceTrait: Send + Sync {
    /// Computes personalized daily limits as of today.
    fn calculate_limits(&self, attributes: &PersonalAttributes) -> PersonalLimits;

    /// Computes personalized daily limits as of an explicit reference date.
    /// Used by tests and historical backfills.
    fn calculate_limits_on(
        &self,
        attributes: &PersonalAttributes,
        today: NaiveDate,
    ) -> PersonalLimits;
}
