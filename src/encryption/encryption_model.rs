use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The sensitive subset of a profile record, in plaintext. Every field is
/// optional: partial records (e.g. a profile created without measurements)
/// carry only what the user provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAttributes {
    pub date_of_birth: Option<NaiveDate>,
    pub height_cm: Option<Decimal>,
    pub weight_kg: Option<Decimal>,
    pub has_hypertension: Option<bool>,
    pub has_diabetes: Option<bool>,
    pub has_heart_disease: Option<bool>,
    pub has_kidney_disease: Option<bool>,
    pub is_pregnant: Option<bool>,
}

/// The encrypted representation persisted for a profile record. An absent
/// plaintext field stays absent here; null is never encrypted as a sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedHealthAttributes {
    pub date_of_birth_encrypted: Option<String>,
    pub height_cm_encrypted: Option<String>,
    pub weight_kg_encrypted: Option<String>,
    pub has_hypertension_encrypted: Option<String>,
    pub has_diabetes_encrypted: Option<String>,
    pub has_heart_disease_encrypted: Option<String>,
    pub has_kidney_disease_encrypted: Option<String>,
    pub is_pregnant_encrypted: Option<String>,
}
