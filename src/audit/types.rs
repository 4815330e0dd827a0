//! Common types for the audit pipeline

use std::collections::HashMap;

use serde::Deserialize;

/// One direct or dev dependency present in both the manifest and the
/// lockfile, paired with its exact locked version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub name: String,
    pub locked_version: String,
}

impl PackageRef {
    pub fn new(name: &str, locked_version: &str) -> Self {
        Self {
            name: name.to_string(),
            locked_version: locked_version.to_string(),
        }
    }
}

/// The metadata document the registry serves for one package name,
/// keyed by published version. All fields other than `versions` are ignored.
#[derive(Debug, Deserialize)]
pub struct RegistryDocument {
    pub versions: HashMap<String, VersionMetadata>,
}

/// Per-version record within a registry document.
///
/// `deprecated` carries the maintainer-supplied deprecation message when the
/// version is deprecated; other record fields are discarded on deserialize.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VersionMetadata {
    pub name: String,
    pub version: String,
    pub deprecated: Option<String>,
}
