//! Memoized collection loads.

use std::sync::Arc;

use moka::future::Cache;
use sandbank_shared::{AppError, AppResult};
use serde::de::DeserializeOwned;

use super::fetch::AssetClient;

/// A once-per-process memoized load of one fixture collection.
///
/// Backed by a single-entry `moka` future cache: concurrent first callers
/// coalesce onto one in-flight fetch, successful results are replayed to all
/// later callers, and failures are not memoized. [`CollectionCache::clear`]
/// drops the memoization so the next call re-fetches.
pub struct CollectionCache<T> {
    path: &'static str,
    cache: Cache<&'static str, Arc<Vec<T>>>,
}

impl<T> CollectionCache<T>
where
    T: Clone + Send + Sync + DeserializeOwned + 'static,
{
    /// Creates a cache for the collection at `path`.
    #[must_use]
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            cache: Cache::new(1),
        }
    }

    /// Returns the memoized collection, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Propagates the fetch failure to every caller that coalesced onto the
    /// failing load. The failure itself is not cached.
    pub async fn load(&self, client: &AssetClient) -> AppResult<Arc<Vec<T>>> {
        self.cache
            .try_get_with(self.path, async {
                client.get_json::<Vec<T>>(self.path).await.map(Arc::new)
            })
            .await
            .map_err(|e: Arc<AppError>| (*e).clone())
    }

    /// Resolves the first record matching `predicate`, or `None`.
    ///
    /// Absence is the empty result, not an error.
    pub async fn find(
        &self,
        client: &AssetClient,
        predicate: impl Fn(&T) -> bool,
    ) -> AppResult<Option<T>> {
        let records = self.load(client).await?;
        Ok(records.iter().find(|record| predicate(record)).cloned())
    }

    /// Discards the memoized collection; the next load re-fetches.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    /// The fixture path this cache loads.
    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }
}
