pub mod encryption_errors;
pub mod encryption_model;
pub mod encryption_service;
pub mod encryption_traits;

pub use encryption_errors::EncryptionError;
pub use encryption_model::{EncryptedHealthAttributes, HealthAttributes};
pub use encryption_service::EncryptionService;
pub use encryption_traits::EncryptionServiceTrait;
