use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::limits::PersonalLimits;
use crate::utils::round_display;

use super::grading_model::{Grade, GradingResult, NutrientContent, NutrientZone};
use super::grading_traits::ProductGradingServiceTrait;

/// Classifies nutrient exposure into traffic-light zones and a letter grade.
///
/// Stateless; one instance can be shared across threads without
/// synchronization.
pub struct ProductGradingService;

impl ProductGradingService {
    pub fn new() -> Self {
        ProductGradingService
    }

    /// Traffic-light zone for a single nutrient.
    ///
    /// The green boundary is evaluated against the soft limit while the
    /// yellow/orange/red boundaries are evaluated against the hard limit.
    /// That asymmetry is intentional: the caution band opens early relative
    /// to the advisory threshold and widens against the critical one.
    /// A missing measurement or non-positive limit resolves to green.
    pub fn classify_zone(
        value: Option<Decimal>,
        soft_limit: Decimal,
        hard_limit: Decimal,
    ) -> NutrientZone {
        let value = match value {
            Some(v) => v,
            None => return NutrientZone::Green,
        };

        let pct_of_soft = if soft_limit > Decimal::ZERO {
            value / soft_limit * dec!(100)
        } else {
            Decimal::ZERO
        };
        let pct_of_hard = if hard_limit > Decimal::ZERO {
            value / hard_limit * dec!(100)
        } else {
            Decimal::ZERO
        };

        if pct_of_soft < dec!(25) {
            NutrientZone::Green
        } else if pct_of_hard < dec!(50) {
            NutrientZone::Yellow
        } else if pct_of_hard < dec!(75) {
            NutrientZone::Orange
        } else {
            NutrientZone::Red
        }
    }

    /// Grade decision ladder: the rules are evaluated top-down and the first
    /// matching one decides. The order encodes precedence and must be kept.
    pub fn decide_grade(
        zones: [NutrientZone; 3],
        additive_count: u32,
        nova_group: Option<i32>,
    ) -> Grade {
        let red_count = zones.iter().filter(|z| **z == NutrientZone::Red).count();
        let orange_count = zones.iter().filter(|z| **z == NutrientZone::Orange).count();
        let is_ultra_processed = nova_group == Some(4);
        let high_additive = additive_count >= 5;

        let rules = [
            (red_count >= 2, Grade::D),
            (red_count >= 1 && (is_ultra_processed || high_additive), Grade::D),
            (red_count >= 1 || orange_count >= 2, Grade::C),
            (orange_count >= 1, Grade::B),
            (is_ultra_processed && additive_count >= 3, Grade::B),
            (true, Grade::A),
        ];

        rules
            .iter()
            .find(|(matched, _)| *matched)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::A)
    }

    /// Percentage of the hard limit consumed, 0 when either side is missing
    /// or non-positive.
    fn pct_of_limit(value: Option<Decimal>, hard_limit: Decimal) -> Decimal {
        match value {
            Some(v) if hard_limit > Decimal::ZERO => round_display(v / hard_limit * dec!(100)),
            _ => Decimal::ZERO,
        }
    }
}

impl Default for ProductGradingService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductGradingServiceTrait for ProductGradingService {
    fn grade_product(
        &self,
        nutrients: &NutrientContent,
        limits: &PersonalLimits,
        additive_count: u32,
        nova_group: Option<i32>,
    ) -> GradingResult {
        debug!("Grading product against personal limits");

        let sugar_zone =
            Self::classify_zone(nutrients.sugar_g, limits.sugar_soft_g, limits.sugar_hard_g);
        let sodium_zone = Self::classify_zone(
            nutrients.sodium_mg,
            limits.sodium_soft_mg,
            limits.sodium_hard_mg,
        );
        let satfat_zone =
            Self::classify_zone(nutrients.satfat_g, limits.satfat_soft_g, limits.satfat_hard_g);

        let zones = [sugar_zone, sodium_zone, satfat_zone];
        let grade = Self::decide_grade(zones, additive_count, nova_group);
        let dangerous_nutrients_count =
            zones.iter().filter(|z| **z >= NutrientZone::Orange).count() as u32;

        GradingResult {
            grade,
            sugar_zone,
            sodium_zone,
            satfat_zone,
            dangerous_nutrients_count,
            sugar_pct_of_limit: Self::pct_of_limit(nutrients.sugar_g, limits.sugar_hard_g),
            sodium_pct_of_limit: Self::pct_of_limit(nutrients.sodium_mg, limits.sodium_hard_mg),
            satfat_pct_of_limit: Self::pct_of_limit(nutrients.satfat_g, limits.satfat_hard_g),
            additive_count,
            nova_group,
        }
    }
}
