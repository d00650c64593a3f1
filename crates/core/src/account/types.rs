//! Account domain types.

use rust_decimal::Decimal;
use sandbank_shared::types::{AccountId, Currency, CustomerId, Money};
use serde::{Deserialize, Serialize};

/// A customer account.
///
/// The balance is a running total mutated only through the transaction
/// creation flow; it is not recomputed from the transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier.
    pub id: AccountId,
    /// Owning customer (CIF).
    pub customer_id: CustomerId,
    /// Product type.
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// Account currency.
    pub currency: Currency,
    /// Current balance in major units. Signed; only debit creation checks it.
    pub balance: Decimal,
    /// International bank account number.
    pub iban: String,
    /// Lifecycle status.
    pub status: AccountStatus,
}

/// Account product types shipped in the fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Day-to-day current account.
    Current,
    /// Interest-bearing savings account.
    Savings,
    /// Anything else the fixtures ship.
    #[serde(other)]
    Other,
}

/// Account lifecycle status. Only `Active` is special-cased by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Open and usable.
    Active,
    /// Open but inactive for an extended period.
    Dormant,
    /// Permanently closed.
    Closed,
    /// Anything else the fixtures ship.
    #[serde(other)]
    Other,
}

impl Account {
    /// Balance paired with the account currency.
    #[must_use]
    pub fn money(&self) -> Money {
        Money::new(self.balance, self.currency)
    }

    /// Returns true if the account is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current => write!(f, "Current"),
            Self::Savings => write!(f, "Savings"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Dormant => write!(f, "Dormant"),
            Self::Closed => write!(f, "Closed"),
            Self::Other => write!(f, "Other"),
        }
    }
}
