use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::encryption_model::{EncryptedHealthAttributes, HealthAttributes};

/// Trait defining the contract for the sensitive-field codec.
///
/// One instance per process, constructed from the master secret and passed
/// explicitly to whatever needs it. Calls hold no mutable state, so a single
/// instance is safe to share across threads.
pub trait EncryptionServiceTrait: Send + Sync {
    /// Encrypts a plaintext string into an opaque persisted representation.
    /// Two calls with the same plaintext produce different ciphertexts.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypts a persisted representation. Fails with a decryption error
    /// when the ciphertext is corrupted, forged, or keyed differently.
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    fn encrypt_bool(&self, value: bool) -> Result<String>;
    fn decrypt_bool(&self, ciphertext: &str) -> Result<bool>;

    fn encrypt_decimal(&self, value: Decimal) -> Result<String>;
    fn decrypt_decimal(&self, ciphertext: &str) -> Result<Decimal>;

    fn encrypt_date(&self, value: NaiveDate) -> Result<String>;
    fn decrypt_date(&self, ciphertext: &str) -> Result<NaiveDate>;

    /// Encrypts whichever sensitive attributes are present, leaving absent
    /// ones absent.
    fn encrypt_attributes(&self, attributes: &HealthAttributes)
        -> Result<EncryptedHealthAttributes>;

    /// Reconstructs typed attributes from whichever encrypted fields are
    /// present; absent ciphertexts decode to `None` without touching the
    /// cipher.
    fn decrypt_attributes(&self, encrypted: &EncryptedHealthAttributes)
        -> Result<HealthAttributes>;

    /// Stable SHA-256 hex digest of a PII value, used by the hosting layer
    /// for equality lookups over encrypted columns.
    fn hash_pii(&self, value: &str) -> String;
}
