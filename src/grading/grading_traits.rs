use crate::limits::PersonalLimits;

use super::grading_model::{GradingResult, NutrientContent};

/// Trait defining the contract for the product grading service.
///
/// Grading is deterministic and side-effect free; missing measurements and
/// non-positive limits resolve to safe defaults instead of errors.
pub trait ProductGradingServiceTrait: Send + Sync {
    /// Grades one product's per-serving nutrients against a person's limits.
    fn grade_product(
        &self,
        nutrients: &NutrientContent,
        limits: &PersonalLimits,
        additive_count: u32,
        nova_group: Option<i32>,
    ) -> GradingResult;
}
