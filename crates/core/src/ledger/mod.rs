//! Transaction ledger.
//!
//! This module implements the transaction side of the sandbox:
//! - Transaction records and creation inputs
//! - The transaction service (history, creation, persistence)
//! - Client-side filtering and sorting
//! - CSV export
//! - Monthly spending insights
//! - Entry-form validation rules
//! - Error types for ledger operations

pub mod error;
pub mod export;
pub mod filter;
pub mod insights;
pub mod service;
pub mod types;
pub mod validation;


#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use export::export_csv;
pub use filter::{SortKey, SortOrder, TransactionFilter, sort_transactions};
pub use insights::{CategorySpend, MonthlyInsights, monthly_insights};
pub use service::TransactionService;
pub use types::{NewTransaction, Transaction, TransactionKind};
pub use validation::{EntryRules, ValidationError};
