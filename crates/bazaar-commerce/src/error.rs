//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
///
/// Cart mutations and bucket derivations never error (absent lines and
/// thin candidate pools resolve to silent no-ops / omitted buckets); the
/// fallible surfaces are the feed boundary and the affiliate registry.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Affiliate code not found.
    #[error("Affiliate not found: {0}")]
    AffiliateNotFound(i64),

    /// Affiliate code already registered.
    #[error("Affiliate code already exists: {0}")]
    DuplicateAffiliateCode(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
