use chrono::{NaiveDate, Utc};
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{
    BASE_SODIUM_HARD_MG, BASE_SODIUM_SOFT_MG, EER_MAX_KCAL, EER_MIN_KCAL, KCAL_PER_G_CARB,
    KCAL_PER_G_FAT, PREGNANCY_EER_SUPPLEMENT_KCAL,
};
use crate::utils::round_display;

use super::limits_model::{ActivityLevel, LimitFlags, PersonalAttributes, PersonalLimits, Sex};
use super::limits_traits::PersonalLimitsServiceTrait;

/// Computes personalized daily nutrient limits from profile attributes.
///
/// Stateless; one instance can be shared across threads without
/// synchronization.
pub struct PersonalLimitsService;

impl PersonalLimitsService {
    pub fn new() -> Self {
        PersonalLimitsService
    }

    /// Whole years between `date_of_birth` and `today`, using the mean
    /// Gregorian year length and truncating.
    fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
        let days = Decimal::from(today.signed_duration_since(date_of_birth).num_days());
        (days / dec!(365.25)).trunc().to_i32().unwrap_or(0)
    }

    /// Population default height in centimeters for profiles without a
    /// measurement. Profiles recorded as `Other` use the female band.
    fn default_height_cm(age_years: i32, sex: Sex) -> Decimal {
        match sex {
            Sex::Male => {
                if age_years >= 18 {
                    dec!(165)
                } else if age_years >= 14 {
                    dec!(160)
                } else {
                    dec!(140)
                }
            }
            Sex::Female | Sex::Other => {
                if age_years >= 18 {
                    dec!(158)
                } else if age_years >= 14 {
                    dec!(155)
                } else {
                    dec!(140)
                }
            }
        }
    }

    /// Population default weight in kilograms for profiles without a
    /// measurement. Profiles recorded as `Other` use the female band.
    fn default_weight_kg(age_years: i32, sex: Sex) -> Decimal {
        match sex {
            Sex::Male => {
                if age_years >= 18 {
                    dec!(65)
                } else if age_years >= 14 {
                    dec!(58)
                } else {
                    dec!(35)
                }
            }
            Sex::Female | Sex::Other => {
                if age_years >= 18 {
                    dec!(55)
                } else if age_years >= 14 {
                    dec!(52)
                } else {
                    dec!(35)
                }
            }
        }
    }

    /// Physical-activity coefficient by (sex, activity level).
    ///
    /// The reference table only defines male and female rows; `Other` falls
    /// back to the neutral coefficient 1.0 rather than an arbitrary row.
    fn pa_coefficient(sex: Sex, activity_level: ActivityLevel) -> Decimal {
        match (sex, activity_level) {
            (Sex::Male, ActivityLevel::Sedentary) => dec!(1.00),
            (Sex::Male, ActivityLevel::Light) => dec!(1.11),
            (Sex::Male, ActivityLevel::Active) => dec!(1.25),
            (Sex::Male, ActivityLevel::VeryActive) => dec!(1.48),
            (Sex::Female, ActivityLevel::Sedentary) => dec!(1.00),
            (Sex::Female, ActivityLevel::Light) => dec!(1.12),
            (Sex::Female, ActivityLevel::Active) => dec!(1.27),
            (Sex::Female, ActivityLevel::VeryActive) => dec!(1.45),
            (Sex::Other, _) => dec!(1.0),
        }
    }

    /// Adult/adolescent estimated energy requirement in kcal. Sexes without a
    /// dedicated equation use the female one.
    fn eer_adult(
        age_years: i32,
        sex: Sex,
        height_m: Decimal,
        weight_kg: Decimal,
        pa: Decimal,
    ) -> Decimal {
        let age = Decimal::from(age_years);
        match sex {
            Sex::Male => {
                dec!(662) - dec!(9.53) * age
                    + pa * (dec!(15.91) * weight_kg + dec!(539.6) * height_m)
            }
            Sex::Female | Sex::Other => {
                dec!(354) - dec!(6.91) * age + pa * (dec!(9.36) * weight_kg + dec!(726) * height_m)
            }
        }
    }

    /// Bracket energy table for children under 14, keyed by age band, sex,
    /// and whether the activity level counts as vigorous. Ages outside the
    /// 3-13 bands get the middle value.
    fn eer_child(age_years: i32, sex: Sex, activity_level: ActivityLevel) -> Decimal {
        let vigorous = activity_level.is_vigorous();
        match (age_years, sex) {
            (3..=8, Sex::Male) => {
                if vigorous {
                    dec!(1400)
                } else {
                    dec!(1200)
                }
            }
            (3..=8, _) => {
                if vigorous {
                    dec!(1300)
                } else {
                    dec!(1100)
                }
            }
            (9..=13, Sex::Male) => {
                if vigorous {
                    dec!(1800)
                } else {
                    dec!(1600)
                }
            }
            (9..=13, _) => {
                if vigorous {
                    dec!(1700)
                } else {
                    dec!(1500)
                }
            }
            _ => dec!(1400),
        }
    }
}

impl Default for PersonalLimitsService {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalLimitsServiceTrait for PersonalLimitsService {
    fn calculate_limits(&self, attributes: &PersonalAttributes) -> PersonalLimits {
        self.calculate_limits_on(attributes, Utc::now().date_naive())
    }

    fn calculate_limits_on(
        &self,
        attributes: &PersonalAttributes,
        today: NaiveDate,
    ) -> PersonalLimits {
        debug!("Calculating personal limits");

        let age_years = Self::calculate_age(attributes.date_of_birth, today);

        let height_cm = attributes
            .height_cm
            .unwrap_or_else(|| Self::default_height_cm(age_years, attributes.sex));
        let weight_kg = attributes
            .weight_kg
            .unwrap_or_else(|| Self::default_weight_kg(age_years, attributes.sex));

        let height_m = height_cm / dec!(100);
        let bmi = weight_kg / (height_m * height_m);

        // Risk flags are plain ORs over the inputs; no flag negates another.
        let is_child = age_years < 18;
        let risk_glucose = attributes.has_diabetes || bmi >= dec!(30);
        let risk_cvd = attributes.has_heart_disease || attributes.has_diabetes;
        let risk_hypertension = attributes.has_hypertension || attributes.has_kidney_disease;
        let risk_pregnancy = attributes.is_pregnant;

        let mut eer = if is_child && age_years < 14 {
            Self::eer_child(age_years, attributes.sex, attributes.activity_level)
        } else {
            let pa = Self::pa_coefficient(attributes.sex, attributes.activity_level);
            Self::eer_adult(age_years, attributes.sex, height_m, weight_kg, pa)
        };

        if risk_pregnancy {
            eer += PREGNANCY_EER_SUPPLEMENT_KCAL;
        }
        let eer = eer.clamp(EER_MIN_KCAL, EER_MAX_KCAL);

        let (sugar_pct_hard, sugar_pct_soft) = if risk_glucose {
            (dec!(0.05), dec!(0.05))
        } else {
            (dec!(0.10), dec!(0.075))
        };
        let sugar_hard = eer * sugar_pct_hard / KCAL_PER_G_CARB;
        let sugar_soft = eer * sugar_pct_soft / KCAL_PER_G_CARB;

        // Children get the adult sodium baseline scaled by energy need.
        let (base_sodium_hard, base_sodium_soft) = if is_child {
            let factor = (eer / dec!(2000)).clamp(dec!(0.5), dec!(1.0));
            (BASE_SODIUM_HARD_MG * factor, BASE_SODIUM_SOFT_MG * factor)
        } else {
            (BASE_SODIUM_HARD_MG, BASE_SODIUM_SOFT_MG)
        };
        let (sodium_hard, sodium_soft) = if risk_hypertension || risk_cvd {
            if is_child {
                (base_sodium_hard * dec!(0.75), base_sodium_soft * dec!(0.75))
            } else {
                (dec!(1500), dec!(1200))
            }
        } else {
            (base_sodium_hard, base_sodium_soft)
        };

        let (satfat_pct_hard, satfat_pct_soft) = if risk_cvd || risk_glucose {
            (dec!(0.07), dec!(0.06))
        } else {
            (dec!(0.10), dec!(0.08))
        };
        let satfat_hard = eer * satfat_pct_hard / KCAL_PER_G_FAT;
        let satfat_soft = eer * satfat_pct_soft / KCAL_PER_G_FAT;

        let transfat_hard = eer * dec!(0.01) / KCAL_PER_G_FAT;

        PersonalLimits {
            eer_kcal: round_display(eer),
            sugar_soft_g: round_display(sugar_soft),
            sugar_hard_g: round_display(sugar_hard),
            sodium_soft_mg: round_display(sodium_soft),
            sodium_hard_mg: round_display(sodium_hard),
            satfat_soft_g: round_display(satfat_soft),
            satfat_hard_g: round_display(satfat_hard),
            transfat_hard_g: round_display(transfat_hard),
            flags: LimitFlags {
                is_child,
                risk_glucose,
                risk_cvd,
                risk_hypertension,
                risk_pregnancy,
                bmi: round_display(bmi),
                age_years,
            },
        }
    }
}
