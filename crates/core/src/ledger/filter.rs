//! Client-side filtering and sorting.
//!
//! Pure, synchronous recomputations over the loaded collection — no I/O.

use chrono::NaiveDate;

use super::types::{Transaction, TransactionKind};

/// Filter criteria for the transaction list. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
    /// Restrict to one transaction kind.
    pub kind: Option<TransactionKind>,
    /// Restrict to one category.
    pub category: Option<String>,
}

impl TransactionFilter {
    /// Returns true when no criterion is set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true when the transaction satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(from) = self.date_from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if transaction.date > to {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if transaction.category != *category {
                return false;
            }
        }
        true
    }

    /// Applies the filter, preserving the input order.
    #[must_use]
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|transaction| self.matches(transaction))
            .cloned()
            .collect()
    }
}

/// Sortable columns of the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by calendar day.
    Date,
    /// Sort by amount.
    Amount,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Sorts in place. Stable, so equal keys keep their relative order.
pub fn sort_transactions(transactions: &mut [Transaction], key: SortKey, order: SortOrder) {
    transactions.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}
