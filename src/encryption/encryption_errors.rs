use thiserror::Error;

/// Errors produced by the sensitive-field codec.
#[derive(Error, Debug)]
pub enum EncryptionError {
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// The ciphertext is corrupted, forged, or was produced under a different
    /// master secret. The codec never downgrades this to a default value;
    /// callers must surface it.
    #[error("Decryption failed: ciphertext integrity check failed")]
    Decryption,

    #[error("Invalid ciphertext encoding: {0}")]
    InvalidCiphertext(String),

    #[error("Failed to decode decrypted value: {0}")]
    Decode(String),
}
