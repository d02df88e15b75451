use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Traffic-light classification of a single nutrient's consumption relative
/// to the person's soft and hard limits, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientZone {
    Green,
    Yellow,
    Orange,
    Red,
}

/// Overall letter grade for a product scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

/// Per-serving nutrient content of a scanned product. A `None` value means
/// the catalog had no nutrition data for that nutrient.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientContent {
    pub sugar_g: Option<Decimal>,
    pub sodium_mg: Option<Decimal>,
    pub satfat_g: Option<Decimal>,
}

/// Outcome of grading one product against one person's limits.
///
/// Purely derived; persisted as a scan record by the caller and otherwise
/// carries no identity or lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    pub grade: Grade,
    pub sugar_zone: NutrientZone,
    pub sodium_zone: NutrientZone,
    pub satfat_zone: NutrientZone,
    /// Number of zones in orange or red.
    pub dangerous_nutrients_count: u32,
    pub sugar_pct_of_limit: Decimal,
    pub sodium_pct_of_limit: Decimal,
    pub satfat_pct_of_limit: Decimal,
    pub additive_count: u32,
    /// NOVA food-processing group (1-4), if known. 4 denotes ultra-processed.
    pub nova_group: Option<i32>,
}
