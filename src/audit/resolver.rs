//! Exact-version lookup within a registry document

use crate::audit::error::RegistryError;
use crate::audit::types::{RegistryDocument, VersionMetadata};

/// Looks up the metadata for the exact locked version in a registry document.
///
/// Exact string match against the published version keys only: no semver
/// range matching and no "latest" fallback. A well-formed lockfile records
/// a version byte-identical to a published key; anything else is
/// `VersionNotFound`.
pub fn resolve_version(
    document: &RegistryDocument,
    target_version: &str,
) -> Result<VersionMetadata, RegistryError> {
    document
        .versions
        .get(target_version)
        .cloned()
        .ok_or_else(|| RegistryError::VersionNotFound(target_version.to_string()))
}
