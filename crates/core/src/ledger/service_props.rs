//! Property-based tests for transaction creation.
//!
//! - A debit within the balance always succeeds and moves the balance by
//!   exactly the debit amount, with the new record at the head of the list.
//! - A debit above the balance always fails and leaves every state untouched.

use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use sandbank_shared::types::{AccountId, Currency, CustomerId};
use sandbank_store::{Vault, VaultBacking};

use crate::account::{Account, AccountKind, AccountService, AccountStatus};
use crate::ledger::error::LedgerError;
use crate::ledger::service::TransactionService;
use crate::ledger::types::{NewTransaction, TransactionKind};
use crate::refdata::AssetClient;

/// Strategy for positive amounts in cents (0.01 to 10,000.00).
fn cents() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

fn amount_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn seed_account(balance: Decimal) -> Account {
    Account {
        id: AccountId::new("A1"),
        customer_id: CustomerId::new("C1"),
        kind: AccountKind::Current,
        currency: Currency::Eur,
        balance,
        iban: "CH00 A1".to_string(),
        status: AccountStatus::Active,
    }
}

fn debit(amount: Decimal) -> NewTransaction {
    NewTransaction {
        account_id: AccountId::new("A1"),
        kind: TransactionKind::Debit,
        amount,
        date: NaiveDate::from_ymd_opt(2026, 8, 6).expect("date"),
        merchant: "Merchant".to_string(),
        category: "Groceries".to_string(),
    }
}

async fn services(balance: Decimal) -> (Arc<AccountService>, TransactionService) {
    let assets = Arc::new(AssetClient::new("http://127.0.0.1:1"));
    let vault = Arc::new(Vault::open(&VaultBacking::memory()).expect("vault"));

    let accounts = Arc::new(AccountService::new(Arc::clone(&assets), Arc::clone(&vault)).await);
    accounts.preload(vec![seed_account(balance)]);

    let transactions = TransactionService::new(assets, vault, Arc::clone(&accounts)).await;
    transactions.preload(Vec::new());
    (accounts, transactions)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

proptest! {
    #[test]
    fn debit_within_balance_moves_balance_exactly(
        (balance_cents, debit_cents) in cents()
            .prop_flat_map(|balance| (Just(balance), 1i64..=balance))
    ) {
        let balance = amount_from_cents(balance_cents);
        let amount = amount_from_cents(debit_cents);

        runtime().block_on(async {
            let (accounts, transactions) = services(balance).await;

            let created = transactions.create(debit(amount)).await.expect("create");

            prop_assert_eq!(accounts.balance(&AccountId::new("A1")), balance - amount);
            let list = transactions.transactions().await.expect("list");
            prop_assert_eq!(list.len(), 1);
            prop_assert_eq!(&list[0].id, &created.id);
            prop_assert_eq!(list[0].kind, TransactionKind::Debit);
            Ok(())
        })?;
    }

    #[test]
    fn debit_above_balance_changes_nothing(
        (balance_cents, excess_cents) in cents().prop_flat_map(|balance| (Just(balance), 1i64..1_000_000i64))
    ) {
        let balance = amount_from_cents(balance_cents);
        let amount = amount_from_cents(balance_cents + excess_cents);

        runtime().block_on(async {
            let (accounts, transactions) = services(balance).await;

            let err = transactions.create(debit(amount)).await.expect_err("must fail");

            prop_assert!(matches!(err, LedgerError::InsufficientBalance));
            prop_assert_eq!(accounts.balance(&AccountId::new("A1")), balance);
            prop_assert!(transactions.current().is_empty());
            Ok(())
        })?;
    }
}
