//! NuCa Core - personalized nutrition limits, product grading, and
//! field-level health-data encryption.
//!
//! This crate contains the core decision and encoding logic. It performs no
//! I/O and owns no storage or network surface; request handling, persistence,
//! and catalog lookups live in the hosting application.

pub mod constants;
pub mod encryption;
pub mod errors;
pub mod grading;
pub mod limits;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
