//! Monthly spending insights.
//!
//! Aggregates the transactions of one calendar month: debit and credit
//! totals, and the category with the highest debit spend.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::types::{Transaction, TransactionKind};

/// Total debit spend of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpend {
    /// Category name.
    pub category: String,
    /// Summed debit amount.
    pub total: Decimal,
}

/// Aggregated view of the current calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyInsights {
    /// Sum of debit amounts.
    pub total_debit: Decimal,
    /// Sum of credit amounts.
    pub total_credit: Decimal,
    /// Category with the highest debit total, if any debits exist.
    /// Ties resolve to the category seen first during accumulation.
    pub top_debit_category: Option<CategorySpend>,
    /// Number of transactions in the month.
    pub transaction_count: usize,
}

/// Computes the insights for the calendar month containing `today`.
#[must_use]
pub fn monthly_insights(transactions: &[Transaction], today: NaiveDate) -> MonthlyInsights {
    let monthly: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
        .collect();

    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;
    // Insertion-ordered so the first-seen category wins ties.
    let mut category_totals: Vec<(String, Decimal)> = Vec::new();

    for transaction in &monthly {
        match transaction.kind {
            TransactionKind::Debit => {
                total_debit += transaction.amount;
                match category_totals
                    .iter_mut()
                    .find(|(category, _)| *category == transaction.category)
                {
                    Some((_, total)) => *total += transaction.amount,
                    None => category_totals.push((transaction.category.clone(), transaction.amount)),
                }
            }
            TransactionKind::Credit => total_credit += transaction.amount,
        }
    }

    let mut top_debit_category: Option<CategorySpend> = None;
    for (category, total) in category_totals {
        let is_higher = top_debit_category
            .as_ref()
            .is_none_or(|current| total > current.total);
        if is_higher {
            top_debit_category = Some(CategorySpend { category, total });
        }
    }

    MonthlyInsights {
        total_debit,
        total_credit,
        top_debit_category,
        transaction_count: monthly.len(),
    }
}
