//! Customer domain types.

use sandbank_shared::types::CustomerId;
use serde::{Deserialize, Serialize};

/// A bank customer. Read-only reference data keyed by CIF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer identifier, the primary lookup key.
    #[serde(rename = "CIF")]
    pub cif: CustomerId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Home branch.
    pub branch: String,
    /// Commercial segment tag.
    pub segment: Segment,
}

/// Commercial segment of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Top-tier clients.
    #[serde(rename = "VIP")]
    Vip,
    /// Priority clients.
    Priority,
    /// Standard retail clients.
    Retail,
    /// Anything the fixtures ship that the app does not special-case.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vip => write!(f, "VIP"),
            Self::Priority => write!(f, "Priority"),
            Self::Retail => write!(f, "Retail"),
            Self::Other => write!(f, "Other"),
        }
    }
}
