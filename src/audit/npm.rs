//! npm registry API implementation

use std::time::Duration;

use tracing::warn;

use crate::audit::error::RegistryError;
use crate::audit::registry::Registry;
use crate::audit::types::RegistryDocument;
use crate::config::{DEFAULT_REGISTRY_URL, PoolConfig};

/// Registry implementation for the npm registry API
///
/// Holds a single reqwest client so that the concurrent per-package requests
/// reuse pooled keep-alive connections instead of paying TCP/TLS setup per
/// call.
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL and pool settings
    pub fn new(base_url: &str, pool: &PoolConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("deprecheck")
                .pool_max_idle_per_host(pool.max_idle_connections)
                .tcp_keepalive(Duration::from_secs(pool.keepalive_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL, &PoolConfig::default())
    }
}

#[async_trait::async_trait]
impl Registry for NpmRegistry {
    async fn fetch_document(
        &self,
        package_name: &str,
    ) -> Result<RegistryDocument, RegistryError> {
        let encoded_name = Self::encode_package_name(package_name);
        let url = format!("{}/{}", self.base_url, encoded_name);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let document: RegistryDocument = response.json().await.map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(document)
    }
}
