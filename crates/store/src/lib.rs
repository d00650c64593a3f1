//! Obfuscated local key-value vault.
//!
//! Stands in for the browser-local storage of a real client: values are
//! serialized to JSON, obfuscated with a fixed repeating XOR key, wrapped in
//! an envelope carrying a non-cryptographic checksum and a timestamp, and
//! written under a namespaced key.
//!
//! This is explicitly NOT a security mechanism. The key is a shared constant,
//! the encoding is trivially reversible, and the checksum is a 32-bit
//! multiply-add fold: it provides best-effort tamper *detection* against
//! casual edits, not confidentiality or integrity guarantees.
//!
//! All vault operations fail soft: errors are logged and converted to
//! `false` / `None`, never propagated to callers.

pub mod config;
pub mod envelope;
pub mod error;
pub mod vault;

pub use config::VaultBacking;
pub use error::StoreError;
pub use vault::Vault;

/// Well-known vault keys.
pub mod keys {
    /// Fabricated access token for the current session.
    pub const ACCESS_TOKEN: &str = "auth_token";
    /// Fabricated refresh token for the current session.
    pub const REFRESH_TOKEN: &str = "refresh_token";
    /// Profile of the signed-in demo user.
    pub const AUTH_USER: &str = "auth_user";
    /// Snapshot of the account collection.
    pub const ACCOUNTS: &str = "accounts_data";
    /// Snapshot of the transaction collection.
    pub const TRANSACTIONS: &str = "transactions_data";
}
