//! Vault implementation over an OpenDAL operator.
//!
//! Public operations fail soft: any error is logged via `tracing` and
//! converted to a `false` / `None` return, matching how a client-side app
//! treats its local storage. The fallible internals are kept separate so
//! tests can assert on the precise failure.

use opendal::{ErrorKind, Operator, services};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::config::VaultBacking;
use crate::envelope::Envelope;
use crate::error::StoreError;

/// Namespace prefix applied to every vault key.
pub const KEY_PREFIX: &str = "banking_";

/// Obfuscated local key-value vault.
#[derive(Debug, Clone)]
pub struct Vault {
    operator: Operator,
}

impl Vault {
    /// Opens a vault over the configured backing.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing cannot be initialized.
    pub fn open(backing: &VaultBacking) -> Result<Self, StoreError> {
        let operator = match backing {
            VaultBacking::Memory => {
                let builder = services::Memory::default();
                Operator::new(builder)
                    .map_err(|e| StoreError::configuration(e.to_string()))?
                    .finish()
            }
            VaultBacking::LocalFs { root } => {
                let builder = services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StoreError::configuration("invalid vault root path"))?,
                );
                Operator::new(builder)
                    .map_err(|e| StoreError::configuration(e.to_string()))?
                    .finish()
            }
        };

        debug!(backing = backing.name(), "vault opened");
        Ok(Self { operator })
    }

    /// Stores a value under the namespaced key. Returns false on any failure.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match self.try_set(key, value).await {
            Ok(()) => true,
            Err(e) => {
                error!(key, error = %e, "vault set failed");
                false
            }
        }
    }

    /// Retrieves and verifies a value. Returns `None` when the entry is
    /// absent, corrupted, or unreadable; a corrupted entry is deleted.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_get(key).await {
            Ok(value) => value,
            Err(e) if e.is_not_found() => None,
            Err(StoreError::IntegrityCheckFailed { .. }) => {
                warn!(key, "data integrity check failed");
                self.remove(key).await;
                None
            }
            Err(e) => {
                error!(key, error = %e, "vault get failed");
                None
            }
        }
    }

    /// Deletes the entry under the namespaced key, if any.
    pub async fn remove(&self, key: &str) {
        if let Err(e) = self.operator.delete(&object_path(key)).await {
            let store_err = StoreError::from(e);
            if !store_err.is_not_found() {
                error!(key, error = %store_err, "vault remove failed");
            }
        }
    }

    /// Deletes every entry under the vault namespace.
    pub async fn clear(&self) {
        match self.operator.list("").await {
            Ok(entries) => {
                for entry in entries {
                    if entry.name().starts_with(KEY_PREFIX) {
                        if let Err(e) = self.operator.delete(entry.path()).await {
                            error!(path = entry.path(), error = %e, "vault clear failed");
                        }
                    }
                }
            }
            Err(e) => error!(error = %e, "vault clear failed"),
        }
    }

    /// Returns true if an entry exists under the namespaced key.
    pub async fn has(&self, key: &str) -> bool {
        match self.operator.stat(&object_path(key)).await {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                error!(key, error = %e, "vault stat failed");
                false
            }
        }
    }

    async fn try_set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let plaintext = serde_json::to_string(value)?;
        let envelope = Envelope::seal(&plaintext);
        let bytes = serde_json::to_vec(&envelope)?;
        self.operator.write(&object_path(key), bytes).await?;
        Ok(())
    }

    async fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let buffer = self.operator.read(&object_path(key)).await?;
        let envelope: Envelope = serde_json::from_slice(&buffer.to_vec())?;
        let plaintext = envelope.open(key)?;
        Ok(Some(serde_json::from_str(&plaintext)?))
    }
}

fn object_path(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Snapshot {
        id: String,
        note: String,
    }

    fn memory_vault() -> Vault {
        Vault::open(&VaultBacking::memory()).expect("memory vault")
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let vault = memory_vault();
        let value = Snapshot {
            id: "A1".to_string(),
            note: "hello".to_string(),
        };

        assert!(vault.set("accounts_data", &value).await);
        let back: Option<Snapshot> = vault.get("accounts_data").await;
        assert_eq!(back, Some(value));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let vault = memory_vault();
        let value: Option<Snapshot> = vault.get("nothing_here").await;
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_has_and_remove() {
        let vault = memory_vault();
        assert!(!vault.has("auth_token").await);

        assert!(vault.set("auth_token", &"mock_token_access_x_1").await);
        assert!(vault.has("auth_token").await);

        vault.remove("auth_token").await;
        assert!(!vault.has("auth_token").await);
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_silent() {
        let vault = memory_vault();
        // Must not panic or log an error-path failure for absent entries.
        vault.remove("never_written").await;
    }

    #[tokio::test]
    async fn test_clear_only_touches_namespace() {
        let vault = memory_vault();
        assert!(vault.set("auth_token", &"t").await);
        assert!(vault.set("accounts_data", &vec!["A1"]).await);

        // A foreign object outside the namespace survives a clear.
        vault
            .operator
            .write("unrelated", b"keep me".to_vec())
            .await
            .expect("write foreign object");

        vault.clear().await;

        assert!(!vault.has("auth_token").await);
        assert!(!vault.has("accounts_data").await);
        assert!(vault.operator.stat("unrelated").await.is_ok());
    }

    #[tokio::test]
    async fn test_corrupted_envelope_is_deleted_on_read() {
        let vault = memory_vault();
        assert!(vault.set("accounts_data", &vec!["A1", "A2"]).await);

        // Flip the stored checksum behind the vault's back.
        let path = object_path("accounts_data");
        let raw = vault.operator.read(&path).await.expect("read").to_vec();
        let mut envelope: Envelope = serde_json::from_slice(&raw).expect("envelope");
        envelope.hash = "tampered".to_string();
        vault
            .operator
            .write(&path, serde_json::to_vec(&envelope).expect("bytes"))
            .await
            .expect("write tampered");

        let value: Option<Vec<String>> = vault.get("accounts_data").await;
        assert!(value.is_none());
        assert!(!vault.has("accounts_data").await, "corrupted entry must be deleted");
    }
}
