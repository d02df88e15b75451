use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Biological sex as recorded on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Self-reported physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Levels that move a child into the higher energy bracket.
    pub fn is_vigorous(&self) -> bool {
        matches!(self, ActivityLevel::Active | ActivityLevel::VeryActive)
    }
}

/// Physiological and health attributes feeding the limits calculation.
///
/// Built per call from decrypted or in-memory profile data; the engine does
/// not retain it. Range validation (plausible age, positive measurements)
/// happens at the ingestion boundary, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalAttributes {
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub height_cm: Option<Decimal>,
    pub weight_kg: Option<Decimal>,
    pub activity_level: ActivityLevel,
    pub has_hypertension: bool,
    pub has_diabetes: bool,
    pub has_heart_disease: bool,
    pub has_kidney_disease: bool,
    pub is_pregnant: bool,
}

/// Diagnostic flags derived alongside the limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitFlags {
    pub is_child: bool,
    pub risk_glucose: bool,
    pub risk_cvd: bool,
    pub risk_hypertension: bool,
    pub risk_pregnancy: bool,
    pub bmi: Decimal,
    pub age_years: i32,
}

/// Personalized daily nutrient thresholds.
///
/// Immutable once produced; recomputed from scratch whenever any input
/// attribute changes, never patched in place. For every nutrient pair,
/// `hard >= soft`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalLimits {
    pub eer_kcal: Decimal,
    pub sugar_soft_g: Decimal,
    pub sugar_hard_g: Decimal,
    pub sodium_soft_mg: Decimal,
    pub sodium_hard_mg: Decimal,
    pub satfat_soft_g: Decimal,
    pub satfat_hard_g: Decimal,
    pub transfat_hard_g: Decimal,
    pub flags: LimitFlags,
}
