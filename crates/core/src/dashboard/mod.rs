//! View-model builders for the read routes.
//!
//! The dashboard lists customers with a client-side search; the customer
//! detail aggregates the accounts owned by one CIF.

pub mod types;

pub use types::{CustomerOverview, Severity, segment_severity};

use sandbank_shared::AppResult;
use sandbank_shared::types::CustomerId;

use crate::account::AccountService;
use crate::customer::{Customer, CustomerDirectory};

/// Case-insensitive client-side search over CIF and name.
///
/// An empty or blank query returns the unfiltered list.
#[must_use]
pub fn search_customers(customers: &[Customer], query: &str) -> Vec<Customer> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return customers.to_vec();
    }

    customers
        .iter()
        .filter(|customer| {
            customer.cif.as_str().to_lowercase().contains(&needle)
                || customer.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Builds the customer-detail overview, or `None` for an unknown CIF.
pub async fn customer_overview(
    directory: &CustomerDirectory,
    accounts: &AccountService,
    cif: &CustomerId,
) -> AppResult<Option<CustomerOverview>> {
    let Some(customer) = directory.by_cif(cif).await? else {
        return Ok(None);
    };

    let owned = accounts.accounts_for_customer(cif).await?;
    Ok(Some(CustomerOverview::new(customer, owned)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::Segment;

    fn customer(cif: &str, name: &str) -> Customer {
        Customer {
            cif: CustomerId::new(cif),
            name: name.to_string(),
            email: format!("{cif}@example.com"),
            phone: "+41 79 555 00 00".to_string(),
            branch: "Zurich Main".to_string(),
            segment: Segment::Retail,
        }
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let customers = vec![customer("C1001", "Amelia Brandt"), customer("C1002", "Bruno Keller")];
        assert_eq!(search_customers(&customers, "").len(), 2);
        assert_eq!(search_customers(&customers, "   ").len(), 2);
    }

    #[test]
    fn test_search_matches_cif_and_name_case_insensitively() {
        let customers = vec![customer("C1001", "Amelia Brandt"), customer("C1002", "Bruno Keller")];

        let by_name = search_customers(&customers, "brandt");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].cif, CustomerId::new("C1001"));

        let by_cif = search_customers(&customers, "c1002");
        assert_eq!(by_cif.len(), 1);
        assert_eq!(by_cif[0].name, "Bruno Keller");

        assert!(search_customers(&customers, "zzz").is_empty());
    }
}
