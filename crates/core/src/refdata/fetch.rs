//! HTTP client for the static fixture endpoints.

use sandbank_shared::{AppError, AppResult};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Thin `reqwest` wrapper bound to the asset base URL.
#[derive(Debug, Clone)]
pub struct AssetClient {
    http: reqwest::Client,
    base_url: String,
}

impl AssetClient {
    /// Creates a client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches and deserializes a JSON resource below the base URL.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ExternalService` on transport failures, non-success
    /// status codes, and malformed payloads.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        debug!(%url, "fetching fixture");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("GET {url}: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::ExternalService(format!("GET {url}: {e}")))?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalService(format!("decoding {url}: {e}")))
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_kept_verbatim() {
        let client = AssetClient::new("http://127.0.0.1:4200");
        assert_eq!(client.base_url(), "http://127.0.0.1:4200");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_external_service_error() {
        // Nothing listens on the loopback discard port: refused immediately.
        let client = AssetClient::new("http://127.0.0.1:1");
        let result = client.get_json::<Vec<String>>("mock/customers.json").await;
        assert!(matches!(result, Err(AppError::ExternalService(_))));
    }
}
