//! Vault backing configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Vault backing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VaultBacking {
    /// In-memory backing (tests, demo runs).
    Memory,
    /// Local filesystem backing.
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl VaultBacking {
    /// Create an in-memory backing.
    #[must_use]
    pub const fn memory() -> Self {
        Self::Memory
    }

    /// Create a local filesystem backing.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Get the backing name for log lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::LocalFs { .. } => "local",
        }
    }
}
