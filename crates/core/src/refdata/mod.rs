//! Reference-data loaders for the static JSON fixtures.
//!
//! Each collection is fetched at most once per process: the first caller
//! triggers the HTTP GET, concurrent first callers coalesce onto that single
//! in-flight fetch, and the result is replayed to everyone afterwards. A
//! failed fetch is surfaced to its caller and not memoized — there is no
//! retry policy anywhere; the next call simply fetches again.

pub mod cache;
pub mod catalog;
pub mod fetch;

pub use cache::CollectionCache;
pub use catalog::{TransactionCatalog, TransactionTypeInfo};
pub use fetch::AssetClient;

/// Customer fixture path.
pub const CUSTOMERS_PATH: &str = "mock/customers.json";
/// Account seed fixture path.
pub const ACCOUNTS_PATH: &str = "mock/accounts.json";
/// Transaction seed fixture path.
pub const TRANSACTIONS_PATH: &str = "mock/transactions.json";
/// Transaction type fixture path.
pub const TRANSACTION_TYPES_PATH: &str = "mock/transaction-types.json";
/// Transaction category fixture path.
pub const TRANSACTION_CATEGORIES_PATH: &str = "mock/transaction-categories.json";
