//! Dashboard view-model types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::account::Account;
use crate::customer::{Customer, Segment};

/// Aggregated customer-detail view.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerOverview {
    /// The customer in focus.
    pub customer: Customer,
    /// Accounts owned by the customer, in source order.
    pub accounts: Vec<Account>,
    /// Sum of all account balances, currencies mixed as-is.
    pub total_balance: Decimal,
    /// Number of accounts in `Active` status.
    pub active_accounts: usize,
}

impl CustomerOverview {
    /// Builds the overview from a customer and their accounts.
    #[must_use]
    pub fn new(customer: Customer, accounts: Vec<Account>) -> Self {
        let total_balance = accounts.iter().map(|account| account.balance).sum();
        let active_accounts = accounts.iter().filter(|account| account.is_active()).count();
        Self {
            customer,
            accounts,
            total_balance,
            active_accounts,
        }
    }
}

/// Tag severity used when rendering segment badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral/positive.
    Success,
    /// Informational.
    Info,
    /// Attention.
    Warn,
    /// Highest visual weight.
    Danger,
}

/// Maps a customer segment to its badge severity.
#[must_use]
pub const fn segment_severity(segment: Segment) -> Severity {
    match segment {
        Segment::Vip => Severity::Danger,
        Segment::Priority => Severity::Warn,
        Segment::Retail => Severity::Info,
        Segment::Other => Severity::Success,
    }
}
