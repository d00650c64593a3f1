//! Account service: in-memory collection seeded from the vault or fixtures,
//! mirrored back to the vault on every mutation.

use std::sync::Arc;

use rust_decimal::Decimal;
use sandbank_shared::AppResult;
use sandbank_shared::types::{AccountId, CustomerId};
use sandbank_store::{Vault, keys};
use tokio::sync::watch;
use tracing::debug;

use super::types::Account;
use crate::refdata::{ACCOUNTS_PATH, AssetClient, CollectionCache};
use crate::state::Signal;

/// Owns the mutable account collection.
///
/// Reads prefer the in-memory cell; an empty cell falls back to the fixture
/// seed (fetched once) and mirrors it to the vault. Balance updates replace
/// the matching record immutably and persist the whole snapshot.
pub struct AccountService {
    assets: Arc<AssetClient>,
    vault: Arc<Vault>,
    seed: CollectionCache<Account>,
    accounts: Signal<Vec<Account>>,
}

impl AccountService {
    /// Creates the service, rehydrating any persisted snapshot.
    pub async fn new(assets: Arc<AssetClient>, vault: Arc<Vault>) -> Self {
        let service = Self {
            assets,
            vault,
            seed: CollectionCache::new(ACCOUNTS_PATH),
            accounts: Signal::default(),
        };

        if let Some(stored) = service.vault.get::<Vec<Account>>(keys::ACCOUNTS).await {
            debug!(count = stored.len(), "accounts restored from vault");
            service.accounts.set(stored);
        }
        service
    }

    /// Returns the account collection, seeding it on first use.
    pub async fn accounts(&self) -> AppResult<Vec<Account>> {
        let current = self.accounts.get();
        if !current.is_empty() {
            return Ok(current);
        }

        let seeded = self.seed.load(&self.assets).await?;
        let accounts: Vec<Account> = seeded.as_ref().clone();
        self.accounts.set(accounts.clone());
        self.vault.set(keys::ACCOUNTS, &accounts).await;
        Ok(accounts)
    }

    /// Accounts owned by the given customer, in source order.
    pub async fn accounts_for_customer(&self, customer_id: &CustomerId) -> AppResult<Vec<Account>> {
        Ok(self
            .accounts()
            .await?
            .into_iter()
            .filter(|account| account.customer_id == *customer_id)
            .collect())
    }

    /// First account with the given id, or `None`.
    pub async fn account(&self, account_id: &AccountId) -> AppResult<Option<Account>> {
        Ok(self
            .accounts()
            .await?
            .into_iter()
            .find(|account| account.id == *account_id))
    }

    /// Current balance of the account, `0` if it is not loaded.
    ///
    /// Never errors; reads the in-memory cell only.
    #[must_use]
    pub fn balance(&self, account_id: &AccountId) -> Decimal {
        self.accounts
            .get()
            .iter()
            .find(|account| account.id == *account_id)
            .map_or(Decimal::ZERO, |account| account.balance)
    }

    /// Replaces the matching record with an updated balance and persists the
    /// whole snapshot. Unknown ids leave the collection untouched.
    pub async fn set_balance(&self, account_id: &AccountId, new_balance: Decimal) {
        let updated: Vec<Account> = self
            .accounts
            .get()
            .into_iter()
            .map(|account| {
                if account.id == *account_id {
                    Account {
                        balance: new_balance,
                        ..account
                    }
                } else {
                    account
                }
            })
            .collect();

        self.accounts.set(updated.clone());
        self.vault.set(keys::ACCOUNTS, &updated).await;
    }

    /// Publishes a collection directly, bypassing vault and fixtures.
    ///
    /// Used to stage scenarios in tests and demos.
    pub fn preload(&self, accounts: Vec<Account>) {
        self.accounts.set(accounts);
    }

    /// Subscribes to account collection changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Account>> {
        self.accounts.subscribe()
    }

    /// Drops the in-memory collection, the fixture memoization, and the
    /// persisted snapshot.
    pub async fn clear_cache(&self) {
        self.seed.clear();
        self.accounts.set(Vec::new());
        self.vault.remove(keys::ACCOUNTS).await;
    }
}
