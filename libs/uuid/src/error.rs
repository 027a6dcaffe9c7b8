//! Error types for UUID derivation.

use thiserror::Error;

/// Errors that can occur when deriving a UUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UuidError {
    /// The digest backend cannot supply the hash algorithm.
    #[error("hash algorithm unavailable: {algorithm}")]
    HashAlgorithmUnavailable { algorithm: &'static str },
}

impl UuidError {
    /// Returns true if this error indicates a missing hash algorithm.
    pub fn is_hash_unavailable(&self) -> bool {
        matches!(self, UuidError::HashAlgorithmUnavailable { .. })
    }
}
