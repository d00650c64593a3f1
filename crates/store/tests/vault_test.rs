//! Vault integration tests against the on-disk backing.

use std::path::PathBuf;

use sandbank_store::{Vault, VaultBacking, keys};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Profile {
    email: String,
    name: String,
}

struct TempRoot(PathBuf);

impl TempRoot {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("sandbank-vault-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("create temp vault root");
        Self(root)
    }
}

impl Drop for TempRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[tokio::test]
async fn round_trip_survives_reopen() {
    let root = TempRoot::new();
    let profile = Profile {
        email: "user@bank.com".to_string(),
        name: "Regular User".to_string(),
    };

    {
        let vault = Vault::open(&VaultBacking::local_fs(&root.0)).expect("open vault");
        assert!(vault.set(keys::AUTH_USER, &profile).await);
    }

    // A fresh vault over the same root sees the persisted entry.
    let vault = Vault::open(&VaultBacking::local_fs(&root.0)).expect("reopen vault");
    let back: Option<Profile> = vault.get(keys::AUTH_USER).await;
    assert_eq!(back, Some(profile));
}

#[tokio::test]
async fn on_disk_tampering_is_detected_and_entry_removed() {
    let root = TempRoot::new();
    let vault = Vault::open(&VaultBacking::local_fs(&root.0)).expect("open vault");
    assert!(vault.set(keys::ACCOUNTS, &vec!["A1", "A2"]).await);

    // Corrupt the obfuscated payload directly in the backing file.
    let path = root.0.join("banking_accounts_data");
    let raw = std::fs::read_to_string(&path).expect("read envelope");
    let mut envelope: serde_json::Value = serde_json::from_str(&raw).expect("parse envelope");
    envelope["data"] = serde_json::Value::String("AAAA".to_string());
    std::fs::write(&path, serde_json::to_vec(&envelope).expect("bytes")).expect("write");

    let back: Option<Vec<String>> = vault.get(keys::ACCOUNTS).await;
    assert!(back.is_none());
    assert!(!path.exists(), "tampered entry must be deleted");
}

#[tokio::test]
async fn clear_removes_all_namespaced_entries() {
    let root = TempRoot::new();
    let vault = Vault::open(&VaultBacking::local_fs(&root.0)).expect("open vault");

    assert!(vault.set(keys::ACCESS_TOKEN, &"mock_token_access_x_1").await);
    assert!(vault.set(keys::REFRESH_TOKEN, &"mock_token_refresh_x_1").await);
    assert!(vault.set(keys::TRANSACTIONS, &Vec::<String>::new()).await);

    vault.clear().await;

    assert!(!vault.has(keys::ACCESS_TOKEN).await);
    assert!(!vault.has(keys::REFRESH_TOKEN).await);
    assert!(!vault.has(keys::TRANSACTIONS).await);
}
