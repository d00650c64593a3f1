//! Ledger domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sandbank_shared::types::{AccountId, TransactionId};
use serde::{Deserialize, Serialize};

/// Direction of a transaction against the account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Reduces the balance.
    Debit,
    /// Increases the balance.
    Credit,
}

impl TransactionKind {
    /// Applies the transaction effect to a balance.
    #[must_use]
    pub fn apply(&self, balance: Decimal, amount: Decimal) -> Decimal {
        match self {
            Self::Debit => balance - amount,
            Self::Credit => balance + amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "Debit"),
            Self::Credit => write!(f, "Credit"),
        }
    }
}

/// A ledger transaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction identifier.
    pub id: TransactionId,
    /// Owning account.
    pub account_id: AccountId,
    /// Calendar day of the transaction. No time component is kept.
    pub date: NaiveDate,
    /// Debit or Credit.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Positive amount in the account currency.
    pub amount: Decimal,
    /// Counterparty shown in the list.
    pub merchant: String,
    /// Spending category.
    pub category: String,
}

/// Input for creating a new transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Target account.
    pub account_id: AccountId,
    /// Debit or Credit.
    pub kind: TransactionKind,
    /// Positive amount in the account currency.
    pub amount: Decimal,
    /// Calendar day of the transaction.
    pub date: NaiveDate,
    /// Counterparty.
    pub merchant: String,
    /// Spending category.
    pub category: String,
}
