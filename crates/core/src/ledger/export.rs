//! CSV export of the transaction list.

use super::error::LedgerError;
use super::types::Transaction;

/// Column headers of the export, in order.
const HEADERS: [&str; 6] = ["ID", "Date", "Type", "Amount", "Merchant", "Category"];

/// Renders the transactions as CSV text.
///
/// One header row plus one row per record; amounts at exactly two decimal
/// places. Fields containing the delimiter or quotes are quoted by the
/// writer. No trailing newline, so an empty list is exactly the header row.
///
/// # Errors
///
/// Returns `LedgerError::Export` if serialization fails.
pub fn export_csv(transactions: &[Transaction]) -> Result<String, LedgerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADERS)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for transaction in transactions {
        let row = [
            transaction.id.as_str().to_string(),
            transaction.date.to_string(),
            transaction.kind.to_string(),
            format!("{:.2}", transaction.amount),
            transaction.merchant.clone(),
            transaction.category.clone(),
        ];
        writer
            .write_record(&row)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(text.trim_end_matches('\n').to_string())
}
