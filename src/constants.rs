use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Energy density of carbohydrate, kcal per gram
pub const KCAL_PER_G_CARB: Decimal = dec!(4);

/// Energy density of fat, kcal per gram
pub const KCAL_PER_G_FAT: Decimal = dec!(9);

/// Baseline adult sodium hard limit, milligrams per day
pub const BASE_SODIUM_HARD_MG: Decimal = dec!(2000);

/// Baseline adult sodium soft limit, milligrams per day
pub const BASE_SODIUM_SOFT_MG: Decimal = dec!(1500);

/// Lower bound applied to every computed energy requirement, kcal
pub const EER_MIN_KCAL: Decimal = dec!(1000);

/// Upper bound applied to every computed energy requirement, kcal
pub const EER_MAX_KCAL: Decimal = dec!(3500);

/// Additional daily energy requirement during pregnancy, kcal
pub const PREGNANCY_EER_SUPPLEMENT_KCAL: Decimal = dec!(340);

/// Decimal precision for persisted limit and percentage values
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
