use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use chrono::NaiveDate;
use rand::{rngs::OsRng, RngCore};
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::Result;

use super::encryption_errors::EncryptionError;
use super::encryption_model::{EncryptedHealthAttributes, HealthAttributes};
use super::encryption_traits::EncryptionServiceTrait;

/// Application-wide KDF salt. Deliberately fixed and non-rotating: every
/// process holding the same master secret must derive the same key, so that
/// ciphertexts written by one instance stay readable by all others without a
/// key-exchange or rotation mechanism.
const FIELD_KEY_SALT: &[u8] = b"nuca-v1-fixed-salt";

/// PBKDF2-HMAC-SHA256 iteration count for deriving the field key from the
/// master secret.
const PBKDF2_ITERATIONS: u32 = 390_000;

const NONCE_LEN: usize = 12;

/// Derived 256-bit field key. Erased on drop; never exposed outside the
/// service.
#[derive(Zeroize, ZeroizeOnDrop)]
struct FieldKey([u8; 32]);

/// Keyed codec for sensitive profile fields.
///
/// The key is derived once at construction and never mutated afterwards, so
/// concurrent `encrypt`/`decrypt` calls on a shared instance need no locks.
/// Persisted ciphertexts are base64(nonce || AEAD ciphertext) with a fresh
/// random nonce per call.
pub struct EncryptionService {
    key: FieldKey,
}

impl EncryptionService {
    /// Derives the field key from the hosting process's master secret.
    pub fn new(master_secret: &str) -> Self {
        let mut key = [0u8; 32];
        pbkdf2::pbkdf2_hmac::<Sha256>(
            master_secret.as_bytes(),
            FIELD_KEY_SALT,
            PBKDF2_ITERATIONS,
            &mut key,
        );
        EncryptionService { key: FieldKey(key) }
    }

    fn cipher(&self) -> ChaCha20Poly1305 {
        ChaCha20Poly1305::new(Key::from_slice(&self.key.0))
    }
}

// Key material must never reach logs.
impl std::fmt::Debug for EncryptionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionService").finish_non_exhaustive()
    }
}

impl EncryptionServiceTrait for EncryptionService {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher()
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| EncryptionError::Encryption("AEAD encryption failed".to_string()))?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(payload))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let payload = BASE64
            .decode(ciphertext)
            .map_err(|e| EncryptionError::InvalidCiphertext(e.to_string()))?;
        if payload.len() < NONCE_LEN {
            return Err(
                EncryptionError::InvalidCiphertext("payload shorter than nonce".to_string()).into(),
            );
        }

        let (nonce_bytes, encrypted) = payload.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher()
            .decrypt(nonce, encrypted)
            .map_err(|_| EncryptionError::Decryption)?;

        Ok(String::from_utf8(plaintext)
            .map_err(|e| EncryptionError::Decode(e.to_string()))?)
    }

    fn encrypt_bool(&self, value: bool) -> Result<String> {
        self.encrypt(if value { "true" } else { "false" })
    }

    fn decrypt_bool(&self, ciphertext: &str) -> Result<bool> {
        let decrypted = self.decrypt(ciphertext)?;
        Ok(decrypted.eq_ignore_ascii_case("true"))
    }

    fn encrypt_decimal(&self, value: Decimal) -> Result<String> {
        self.encrypt(&value.to_string())
    }

    fn decrypt_decimal(&self, ciphertext: &str) -> Result<Decimal> {
        let decrypted = self.decrypt(ciphertext)?;
        Ok(decrypted.parse::<Decimal>()?)
    }

    fn encrypt_date(&self, value: NaiveDate) -> Result<String> {
        self.encrypt(&value.format("%Y-%m-%d").to_string())
    }

    fn decrypt_date(&self, ciphertext: &str) -> Result<NaiveDate> {
        let decrypted = self.decrypt(ciphertext)?;
        Ok(NaiveDate::parse_from_str(&decrypted, "%Y-%m-%d")?)
    }

    fn encrypt_attributes(
        &self,
        attributes: &HealthAttributes,
    ) -> Result<EncryptedHealthAttributes> {
        Ok(EncryptedHealthAttributes {
            date_of_birth_encrypted: attributes
                .date_of_birth
                .map(|v| self.encrypt_date(v))
                .transpose()?,
            height_cm_encrypted: attributes
                .height_cm
                .map(|v| self.encrypt_decimal(v))
                .transpose()?,
            weight_kg_encrypted: attributes
                .weight_kg
                .map(|v| self.encrypt_decimal(v))
                .transpose()?,
            has_hypertension_encrypted: attributes
                .has_hypertension
                .map(|v| self.encrypt_bool(v))
                .transpose()?,
            has_diabetes_encrypted: attributes
                .has_diabetes
                .map(|v| self.encrypt_bool(v))
                .transpose()?,
            has_heart_disease_encrypted: attributes
                .has_heart_disease
                .map(|v| self.encrypt_bool(v))
                .transpose()?,
            has_kidney_disease_encrypted: attributes
                .has_kidney_disease
                .map(|v| self.encrypt_bool(v))
                .transpose()?,
            is_pregnant_encrypted: attributes
                .is_pregnant
                .map(|v| self.encrypt_bool(v))
                .transpose()?,
        })
    }

    fn decrypt_attributes(
        &self,
        encrypted: &EncryptedHealthAttributes,
    ) -> Result<HealthAttributes> {
        Ok(HealthAttributes {
            date_of_birth: encrypted
                .date_of_birth_encrypted
                .as_deref()
                .map(|c| self.decrypt_date(c))
                .transpose()?,
            height_cm: encrypted
                .height_cm_encrypted
                .as_deref()
                .map(|c| self.decrypt_decimal(c))
                .transpose()?,
            weight_kg: encrypted
                .weight_kg_encrypted
                .as_deref()
                .map(|c| self.decrypt_decimal(c))
                .transpose()?,
            has_hypertension: encrypted
                .has_hypertension_encrypted
                .as_deref()
                .map(|c| self.decrypt_bool(c))
                .transpose()?,
            has_diabetes: encrypted
                .has_diabetes_encrypted
                .as_deref()
                .map(|c| self.decrypt_bool(c))
                .transpose()?,
            has_heart_disease: encrypted
                .has_heart_disease_encrypted
                .as_deref()
                .map(|c| self.decrypt_bool(c))
                .transpose()?,
            has_kidney_disease: encrypted
                .has_kidney_disease_encrypted
                .as_deref()
                .map(|c| self.decrypt_bool(c))
                .transpose()?,
            is_pregnant: encrypted
                .is_pregnant_encrypted
                .as_deref()
                .map(|c| self.decrypt_bool(c))
                .transpose()?,
        })
    }

    fn hash_pii(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    fn service() -> EncryptionService {
        EncryptionService::new("test-master-secret")
    }

    #[test]
    fn test_text_round_trip() {
        let service = service();
        for plaintext in ["", "plain ascii", "caf\u{e9} na\u{ef}ve \u{1f34e}"] {
            let ciphertext = service.encrypt(plaintext).unwrap();
            assert_ne!(ciphertext, plaintext);
            assert_eq!(service.decrypt(&ciphertext).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_same_plaintext_yields_different_ciphertexts() {
        let service = service();
        let first = service.encrypt("same value").unwrap();
        let second = service.encrypt("same value").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_bool_round_trip_and_case_insensitive_decode() {
        let service = service();
        for value in [true, false] {
            let ciphertext = service.encrypt_bool(value).unwrap();
            assert_eq!(service.decrypt_bool(&ciphertext).unwrap(), value);
        }
        // Legacy writers may have stored mixed-case canonical text.
        let ciphertext = service.encrypt("True").unwrap();
        assert!(service.decrypt_bool(&ciphertext).unwrap());
    }

    #[test]
    fn test_decimal_round_trip() {
        let service = service();
        for value in [dec!(0), dec!(-12.5), dec!(172.25)] {
            let ciphertext = service.encrypt_decimal(value).unwrap();
            assert_eq!(service.decrypt_decimal(&ciphertext).unwrap(), value);
        }
    }

    #[test]
    fn test_leap_year_date_round_trip() {
        let service = service();
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let ciphertext = service.encrypt_date(date).unwrap();
        assert_eq!(service.decrypt_date(&ciphertext).unwrap(), date);
    }

    #[test]
    fn test_cross_instance_decryption_with_same_secret() {
        // Fixed salt: any instance with the same master secret derives the
        // same key and can read ciphertexts from any other.
        let writer = EncryptionService::new("shared-secret");
        let reader = EncryptionService::new("shared-secret");
        let ciphertext = writer.encrypt("portable").unwrap();
        assert_eq!(reader.decrypt(&ciphertext).unwrap(), "portable");
    }

    #[test]
    fn test_tampered_ciphertext_is_rejected() {
        let service = service();
        let ciphertext = service.encrypt("integrity matters").unwrap();

        let mut payload = BASE64.decode(&ciphertext).unwrap();
        let last = payload.len() - 1;
        payload[last] ^= 0x01;
        let tampered = BASE64.encode(payload);

        let result = service.decrypt(&tampered);
        assert!(matches!(
            result,
            Err(Error::Encryption(EncryptionError::Decryption))
        ));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let writer = EncryptionService::new("secret-a");
        let reader = EncryptionService::new("secret-b");
        let ciphertext = writer.encrypt("keyed").unwrap();

        let result = reader.decrypt(&ciphertext);
        assert!(matches!(
            result,
            Err(Error::Encryption(EncryptionError::Decryption))
        ));
    }

    #[test]
    fn test_garbage_ciphertext_is_rejected() {
        let service = service();
        assert!(matches!(
            service.decrypt("not base64 at all!"),
            Err(Error::Encryption(EncryptionError::InvalidCiphertext(_)))
        ));
        assert!(matches!(
            service.decrypt(&BASE64.encode([1u8, 2, 3])),
            Err(Error::Encryption(EncryptionError::InvalidCiphertext(_)))
        ));
    }

    #[test]
    fn test_attributes_round_trip() {
        let service = service();
        let attributes = HealthAttributes {
            date_of_birth: NaiveDate::from_ymd_opt(1992, 2, 29),
            height_cm: Some(dec!(172.5)),
            weight_kg: Some(dec!(68)),
            has_hypertension: Some(false),
            has_diabetes: Some(true),
            has_heart_disease: Some(false),
            has_kidney_disease: Some(false),
            is_pregnant: Some(false),
        };

        let encrypted = service.encrypt_attributes(&attributes).unwrap();
        assert!(encrypted.date_of_birth_encrypted.is_some());
        assert!(encrypted.has_diabetes_encrypted.is_some());

        let decrypted = service.decrypt_attributes(&encrypted).unwrap();
        assert_eq!(decrypted, attributes);
    }

    #[test]
    fn test_absent_attributes_stay_absent() {
        let service = service();
        let attributes = HealthAttributes {
            weight_kg: Some(dec!(70)),
            ..HealthAttributes::default()
        };

        let encrypted = service.encrypt_attributes(&attributes).unwrap();
        assert!(encrypted.date_of_birth_encrypted.is_none());
        assert!(encrypted.height_cm_encrypted.is_none());
        assert!(encrypted.is_pregnant_encrypted.is_none());
        assert!(encrypted.weight_kg_encrypted.is_some());

        let decrypted = service.decrypt_attributes(&encrypted).unwrap();
        assert_eq!(decrypted, attributes);
    }

    #[test]
    fn test_hash_pii_is_stable_and_hex() {
        let service = service();
        let digest = service.hash_pii("user@example.com");
        assert_eq!(digest, service.hash_pii("user@example.com"));
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_debug_does_not_leak_key_material() {
        let service = service();
        let debug_output = format!("{service:?}");
        assert!(!debug_output.contains("key"));
    }
}
