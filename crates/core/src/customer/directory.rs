//! Customer directory: memoized lookups over the customer fixture.

use std::sync::Arc;

use sandbank_shared::AppResult;
use sandbank_shared::types::CustomerId;

use super::types::Customer;
use crate::refdata::{AssetClient, CUSTOMERS_PATH, CollectionCache};

/// Read-only directory of customers.
pub struct CustomerDirectory {
    assets: Arc<AssetClient>,
    cache: CollectionCache<Customer>,
}

impl CustomerDirectory {
    /// Creates a directory reading from the given asset client.
    #[must_use]
    pub fn new(assets: Arc<AssetClient>) -> Self {
        Self {
            assets,
            cache: CollectionCache::new(CUSTOMERS_PATH),
        }
    }

    /// Returns all customers, fetching the fixture on first use.
    pub async fn customers(&self) -> AppResult<Arc<Vec<Customer>>> {
        self.cache.load(&self.assets).await
    }

    /// Resolves a customer by CIF; absence is `None`, not an error.
    pub async fn by_cif(&self, cif: &CustomerId) -> AppResult<Option<Customer>> {
        self.cache
            .find(&self.assets, |customer| customer.cif == *cif)
            .await
    }

    /// Discards the memoized collection; the next call re-fetches.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
