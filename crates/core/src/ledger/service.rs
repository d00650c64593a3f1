//! Transaction service: history, creation, and persistence.

use std::sync::Arc;

use chrono::Utc;
use sandbank_shared::AppResult;
use sandbank_shared::types::{AccountId, TransactionId};
use sandbank_store::{Vault, keys};
use tokio::sync::{Mutex, watch};
use tracing::{debug, info};

use super::error::LedgerError;
use super::types::{NewTransaction, Transaction, TransactionKind};
use crate::account::AccountService;
use crate::refdata::{AssetClient, CollectionCache, TRANSACTIONS_PATH};
use crate::state::Signal;

/// Owns the mutable transaction collection, most-recent-first by insertion.
///
/// Creation applies the paired balance update through the account service.
/// Both successor states are computed before either is published, and a
/// mutation guard serializes writers, so the collection and the balance move
/// together as one state transition.
pub struct TransactionService {
    assets: Arc<AssetClient>,
    vault: Arc<Vault>,
    accounts: Arc<AccountService>,
    seed: CollectionCache<Transaction>,
    transactions: Signal<Vec<Transaction>>,
    mutation: Mutex<()>,
}

impl TransactionService {
    /// Creates the service, rehydrating any persisted snapshot.
    pub async fn new(
        assets: Arc<AssetClient>,
        vault: Arc<Vault>,
        accounts: Arc<AccountService>,
    ) -> Self {
        let service = Self {
            assets,
            vault,
            accounts,
            seed: CollectionCache::new(TRANSACTIONS_PATH),
            transactions: Signal::default(),
            mutation: Mutex::new(()),
        };

        if let Some(stored) = service
            .vault
            .get::<Vec<Transaction>>(keys::TRANSACTIONS)
            .await
        {
            debug!(count = stored.len(), "transactions restored from vault");
            service.transactions.set(stored);
        }
        service
    }

    /// Returns the transaction collection, seeding it on first use.
    pub async fn transactions(&self) -> AppResult<Vec<Transaction>> {
        let current = self.transactions.get();
        if !current.is_empty() {
            return Ok(current);
        }

        let seeded = self.seed.load(&self.assets).await?;
        let transactions: Vec<Transaction> = seeded.as_ref().clone();
        self.transactions.set(transactions.clone());
        self.vault.set(keys::TRANSACTIONS, &transactions).await;
        Ok(transactions)
    }

    /// Transactions of one account, newest date first.
    pub async fn transactions_for_account(
        &self,
        account_id: &AccountId,
    ) -> AppResult<Vec<Transaction>> {
        let mut matching: Vec<Transaction> = self
            .transactions()
            .await?
            .into_iter()
            .filter(|transaction| transaction.account_id == *account_id)
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(matching)
    }

    /// Creates a transaction and applies the paired balance update.
    ///
    /// A debit must not exceed the current balance; on violation nothing is
    /// mutated. On success the record is prepended to the collection, both
    /// snapshots are persisted, and the created record is returned.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NonPositiveAmount` or
    /// `LedgerError::InsufficientBalance`; both leave all state untouched.
    pub async fn create(&self, new: NewTransaction) -> Result<Transaction, LedgerError> {
        let _guard = self.mutation.lock().await;

        if new.amount <= rust_decimal::Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount);
        }

        let balance = self.accounts.balance(&new.account_id);
        if new.kind == TransactionKind::Debit && new.amount > balance {
            return Err(LedgerError::InsufficientBalance);
        }

        let transaction = Transaction {
            id: generate_transaction_id(),
            account_id: new.account_id.clone(),
            date: new.date,
            kind: new.kind,
            amount: new.amount,
            merchant: new.merchant,
            category: new.category,
        };

        // Compute both successor states before publishing either, so the
        // collection and the balance commit as one transition.
        let mut updated = self.transactions.get();
        updated.insert(0, transaction.clone());
        let new_balance = new.kind.apply(balance, new.amount);

        self.transactions.set(updated.clone());
        self.vault.set(keys::TRANSACTIONS, &updated).await;
        self.accounts.set_balance(&new.account_id, new_balance).await;

        info!(
            id = %transaction.id,
            account = %transaction.account_id,
            kind = %transaction.kind,
            "transaction created"
        );
        Ok(transaction)
    }

    /// Point-in-time copy of the loaded collection, without seeding.
    #[must_use]
    pub fn current(&self) -> Vec<Transaction> {
        self.transactions.get()
    }

    /// Publishes a collection directly, bypassing vault and fixtures.
    ///
    /// Used to stage scenarios in tests and demos.
    pub fn preload(&self, transactions: Vec<Transaction>) {
        self.transactions.set(transactions);
    }

    /// Subscribes to transaction collection changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Transaction>> {
        self.transactions.subscribe()
    }

    /// Drops the in-memory collection, the fixture memoization, and the
    /// persisted snapshot.
    pub async fn clear_cache(&self) {
        self.seed.clear();
        self.transactions.set(Vec::new());
        self.vault.remove(keys::TRANSACTIONS).await;
    }
}

/// Identifier from the current timestamp plus a random 4-digit suffix.
/// Collision-tolerant, not cryptographically unique.
fn generate_transaction_id() -> TransactionId {
    let timestamp = Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().as_u128() % 10_000;
    TransactionId::new(format!("T{timestamp}{suffix:04}"))
}
