//! Application configuration management.
//!
//! Every field has a default so the sandbox runs with no config present.
//! Values can be overridden by `config/default.toml`, `config/{RUN_MODE}.toml`,
//! or `SANDBANK__`-prefixed environment variables.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Mock-asset server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Static fixture endpoints, as seen from the client side.
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Local vault configuration.
    #[serde(default)]
    pub vault: VaultConfig,
    /// Mock authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Mock-asset server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the generated mock JSON fixtures.
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            asset_root: default_asset_root(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4200
}

fn default_asset_root() -> PathBuf {
    PathBuf::from("assets")
}

/// Static fixture endpoints, as seen from the client side.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Base URL the reference-data loaders fetch from.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:4200".to_string()
}

/// Local vault configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultConfig {
    /// Root directory for the on-disk vault.
    #[serde(default = "default_vault_root")]
    pub root: PathBuf,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            root: default_vault_root(),
        }
    }
}

fn default_vault_root() -> PathBuf {
    PathBuf::from(".sandbank")
}

/// Mock authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Simulated login latency in milliseconds.
    #[serde(default = "default_login_latency")]
    pub login_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_latency_ms: default_login_latency(),
        }
    }
}

fn default_login_latency() -> u64 {
    500
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SANDBANK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4200);
        assert_eq!(config.assets.base_url, "http://127.0.0.1:4200");
        assert_eq!(config.vault.root, PathBuf::from(".sandbank"));
        assert_eq!(config.auth.login_latency_ms, 500);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server": {"port": 8080}}"#).expect("valid config");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.auth.login_latency_ms, 500);
    }
}
