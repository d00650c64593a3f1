//! Transaction entry catalog: types and categories.
//!
//! Pure reference data for the transaction entry form. Loaded once and
//! cached indefinitely; `clear_cache` is the only invalidation.

use std::sync::Arc;

use sandbank_shared::AppResult;
use serde::{Deserialize, Serialize};

use super::cache::CollectionCache;
use super::fetch::AssetClient;
use super::{TRANSACTION_CATEGORIES_PATH, TRANSACTION_TYPES_PATH};

/// A transaction type entry as shipped in the fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTypeInfo {
    /// Stable code ("Debit", "Credit").
    pub code: String,
    /// Human-readable label.
    pub label: String,
}

/// Catalog of transaction types and spending categories.
pub struct TransactionCatalog {
    assets: Arc<AssetClient>,
    types: CollectionCache<TransactionTypeInfo>,
    categories: CollectionCache<String>,
}

impl TransactionCatalog {
    /// Creates a catalog reading from the given asset client.
    #[must_use]
    pub fn new(assets: Arc<AssetClient>) -> Self {
        Self {
            assets,
            types: CollectionCache::new(TRANSACTION_TYPES_PATH),
            categories: CollectionCache::new(TRANSACTION_CATEGORIES_PATH),
        }
    }

    /// Returns the transaction types, fetching them on first use.
    pub async fn transaction_types(&self) -> AppResult<Arc<Vec<TransactionTypeInfo>>> {
        self.types.load(&self.assets).await
    }

    /// Returns the spending categories, fetching them on first use.
    pub async fn categories(&self) -> AppResult<Arc<Vec<String>>> {
        self.categories.load(&self.assets).await
    }

    /// Discards both memoized collections.
    pub fn clear_cache(&self) {
        self.types.clear();
        self.categories.clear();
    }
}
