//! Ledger error types.
//!
//! Creation failures are structured results surfaced to the entry form; the
//! display text is what the user sees.

use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A debit exceeds the current account balance.
    #[error("Insufficient balance for this transaction")]
    InsufficientBalance,

    /// Transaction amount must be strictly positive.
    #[error("Transaction amount must be positive")]
    NonPositiveAmount,

    /// CSV serialization failed.
    #[error("CSV export failed: {0}")]
    Export(String),
}

impl LedgerError {
    /// Returns the error code for log lines and UI surfaces.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::Export(_) => "EXPORT_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_message_is_user_facing() {
        assert_eq!(
            LedgerError::InsufficientBalance.to_string(),
            "Insufficient balance for this transaction"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::InsufficientBalance.error_code(),
            "INSUFFICIENT_BALANCE"
        );
        assert_eq!(
            LedgerError::NonPositiveAmount.error_code(),
            "NON_POSITIVE_AMOUNT"
        );
        assert_eq!(
            LedgerError::Export(String::new()).error_code(),
            "EXPORT_FAILED"
        );
    }
}
