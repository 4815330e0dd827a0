//! Registry trait for fetching package metadata documents

#[cfg(test)]
use mockall::automock;

use crate::audit::error::RegistryError;
use crate::audit::types::RegistryDocument;

/// Trait for fetching a package's full metadata document from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the metadata document for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "left-pad", "@types/node")
    ///
    /// # Returns
    /// * `Ok(RegistryDocument)` - The per-version metadata map
    /// * `Err(RegistryError)` - If the fetch fails for any reason
    async fn fetch_document(&self, package_name: &str) -> Result<RegistryDocument, RegistryError>;
}
