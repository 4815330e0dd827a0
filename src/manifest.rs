//! package.json / package-lock.json loading
//!
//! Produces the list of direct and dev dependencies that appear in both the
//! manifest and the lockfile, paired with their exact locked versions.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::audit::types::PackageRef;

/// Dependency declarations from package.json
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageManifest {
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

/// Resolved entries from package-lock.json (v1/v2 top-level `dependencies` map)
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PackageLock {
    pub dependencies: IndexMap<String, LockedDependency>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LockedDependency {
    pub version: String,
}

/// Intersects manifest declarations with lockfile entries.
///
/// Only names declared in `dependencies` or `devDependencies` are kept;
/// transitive lockfile entries are skipped. Output order follows the
/// lockfile's entry order.
pub fn locked_direct_dependencies(
    manifest: &PackageManifest,
    lock: &PackageLock,
) -> Vec<PackageRef> {
    let declared: HashSet<&str> = manifest
        .dependencies
        .keys()
        .chain(manifest.dev_dependencies.keys())
        .map(String::as_str)
        .collect();

    lock.dependencies
        .iter()
        .filter(|(name, _)| declared.contains(name.as_str()))
        .map(|(name, locked)| PackageRef::new(name, &locked.version))
        .collect()
}

/// Reads package.json and package-lock.json from a project directory and
/// returns the locked direct dependencies.
///
/// Missing or malformed files are fatal.
pub fn load_project(project_dir: &Path) -> anyhow::Result<Vec<PackageRef>> {
    let manifest: PackageManifest = read_json(&project_dir.join("package.json"))?;
    let lock: PackageLock = read_json(&project_dir.join("package-lock.json"))?;
    Ok(locked_direct_dependencies(&manifest, &lock))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
