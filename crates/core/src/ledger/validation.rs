//! Entry-form validation rules.
//!
//! Pure checks run before a transaction is handed to the service. Violations
//! are structured errors for the form; nothing here panics or performs I/O.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::{NewTransaction, TransactionKind};

/// Entry-form rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Amount outside the accepted range.
    #[error("Amount must be between {min} and {max}")]
    AmountOutOfRange {
        /// Smallest accepted amount.
        min: Decimal,
        /// Largest accepted amount.
        max: Decimal,
    },

    /// Amount carries more decimal places than the currency supports.
    #[error("Amount can have at most {max} decimal places")]
    TooManyDecimalPlaces {
        /// Maximum decimal places.
        max: u32,
    },

    /// Transaction date lies in the future.
    #[error("Date cannot be in the future")]
    FutureDate,

    /// Merchant name too short or too long after trimming.
    #[error("Merchant must be between {min} and {max} characters")]
    MerchantLength {
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },

    /// A debit would exceed the current balance.
    #[error("Insufficient balance for this transaction")]
    InsufficientBalance,
}

/// Configurable bounds for the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRules {
    /// Smallest accepted amount.
    pub min_amount: Decimal,
    /// Largest accepted amount.
    pub max_amount: Decimal,
    /// Maximum decimal places on the amount.
    pub max_decimal_places: u32,
    /// Minimum merchant length after trimming.
    pub merchant_min: usize,
    /// Maximum merchant length after trimming.
    pub merchant_max: usize,
}

impl Default for EntryRules {
    fn default() -> Self {
        Self {
            min_amount: Decimal::new(1, 2), // 0.01
            max_amount: Decimal::from(100_000),
            max_decimal_places: 2,
            merchant_min: 3,
            merchant_max: 50,
        }
    }
}

impl EntryRules {
    /// Validates an entry against every rule, collecting all violations.
    ///
    /// # Errors
    ///
    /// Returns every violated rule; an empty error list never occurs.
    pub fn validate(
        &self,
        entry: &NewTransaction,
        balance: Decimal,
        today: NaiveDate,
    ) -> Result<(), Vec<ValidationError>> {
        let mut violations = Vec::new();

        if entry.amount < self.min_amount || entry.amount > self.max_amount {
            violations.push(ValidationError::AmountOutOfRange {
                min: self.min_amount,
                max: self.max_amount,
            });
        }

        if entry.amount.normalize().scale() > self.max_decimal_places {
            violations.push(ValidationError::TooManyDecimalPlaces {
                max: self.max_decimal_places,
            });
        }

        if entry.date > today {
            violations.push(ValidationError::FutureDate);
        }

        let merchant_len = entry.merchant.trim().chars().count();
        if merchant_len < self.merchant_min || merchant_len > self.merchant_max {
            violations.push(ValidationError::MerchantLength {
                min: self.merchant_min,
                max: self.merchant_max,
            });
        }

        if entry.kind == TransactionKind::Debit && entry.amount > balance {
            violations.push(ValidationError::InsufficientBalance);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
