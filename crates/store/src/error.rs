//! Vault error types.
//!
//! These errors stay inside the crate: the public `Vault` surface converts
//! every failure into a soft `false` / `None` return after logging it.

use thiserror::Error;

/// Vault operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entry not found under the namespaced key.
    #[error("entry not found: {key}")]
    NotFound {
        /// Vault key that was not found.
        key: String,
    },

    /// Checksum recomputed on read does not match the stored checksum.
    #[error("integrity check failed for key: {key}")]
    IntegrityCheckFailed {
        /// Vault key whose envelope failed verification.
        key: String,
    },

    /// Stored payload could not be decoded back to text.
    #[error("payload decoding failed: {0}")]
    Decoding(String),

    /// Value (de)serialization error.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Vault backing configuration error.
    #[error("vault configuration error: {0}")]
    Configuration(String),

    /// Backing store operation error.
    #[error("vault operation failed: {0}")]
    Operation(String),
}

impl StoreError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an integrity failure error.
    #[must_use]
    pub fn integrity(key: impl Into<String>) -> Self {
        Self::IntegrityCheckFailed { key: key.into() }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Returns true for the "absent entry" case, which is not a fault.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<opendal::Error> for StoreError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::NotFound => Self::NotFound {
                key: err.to_string(),
            },
            _ => Self::Operation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(StoreError::not_found("auth_token").is_not_found());
        assert!(!StoreError::integrity("auth_token").is_not_found());
        assert!(!StoreError::configuration("bad root").is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StoreError::not_found("accounts_data").to_string(),
            "entry not found: accounts_data"
        );
        assert_eq!(
            StoreError::integrity("accounts_data").to_string(),
            "integrity check failed for key: accounts_data"
        );
    }
}
