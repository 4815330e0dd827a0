//! Bounded-concurrency resolution of all locked dependencies
//!
//! One fetch+resolve task per dependency, gated by a semaphore so that at
//! most `concurrency_limit` registry requests are in flight at once.
//! Per-item failures are absorbed here; the batch itself never fails.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::audit::error::RegistryError;
use crate::audit::registry::Registry;
use crate::audit::resolver::resolve_version;
use crate::audit::types::{PackageRef, VersionMetadata};

/// Outcome of resolving one locked dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// The locked version was found in the registry document
    Resolved {
        name: String,
        version: String,
        /// Deprecation message, when the version is deprecated
        deprecation: Option<String>,
    },
    /// The fetch or version lookup failed; only the name survives
    Failed { name: String },
}

async fn fetch_and_resolve<R: Registry + ?Sized>(
    registry: &R,
    package: &PackageRef,
) -> Result<VersionMetadata, RegistryError> {
    let document = registry.fetch_document(&package.name).await?;
    resolve_version(&document, &package.locked_version)
}

/// Resolves every dependency against the registry with bounded concurrency.
///
/// Returns exactly one `ResolutionResult` per input ref. Failures are
/// converted in place and logged; they never abort the other lookups.
/// No retries: a failed lookup is terminal for that package within the run.
pub async fn resolve_all<R: Registry + ?Sized>(
    registry: &R,
    packages: Vec<PackageRef>,
    concurrency_limit: usize,
) -> Vec<ResolutionResult> {
    debug!(
        "Resolving {} packages (max {} concurrent)",
        packages.len(),
        concurrency_limit
    );

    let semaphore = Arc::new(Semaphore::new(concurrency_limit.max(1)));

    let tasks = packages.into_iter().map(|package| {
        let semaphore = Arc::clone(&semaphore);
        async move {
            let _permit = semaphore.acquire().await.unwrap();
            match fetch_and_resolve(registry, &package).await {
                Ok(metadata) => ResolutionResult::Resolved {
                    name: metadata.name,
                    version: metadata.version,
                    deprecation: metadata.deprecated,
                },
                Err(e) => {
                    warn!(
                        "Failed to resolve {}@{}: {}",
                        package.name, package.locked_version, e
                    );
                    ResolutionResult::Failed { name: package.name }
                }
            }
        }
    });

    join_all(tasks).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::registry::MockRegistry;
    use crate::audit::types::RegistryDocument;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::sleep;

    fn document_with_version(name: &str, version: &str, deprecated: Option<&str>) -> RegistryDocument {
        let mut versions = HashMap::new();
        versions.insert(
            version.to_string(),
            VersionMetadata {
                name: name.to_string(),
                version: version.to_string(),
                deprecated: deprecated.map(|s| s.to_string()),
            },
        );
        RegistryDocument { versions }
    }

    #[tokio::test]
    async fn resolve_all_returns_one_result_per_input() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_document()
            .withf(|name| name == "ok-pkg")
            .times(1)
            .returning(|_| Ok(document_with_version("ok-pkg", "1.0.0", None)));
        registry
            .expect_fetch_document()
            .withf(|name| name == "broken-pkg")
            .times(1)
            .returning(|_| Err(RegistryError::InvalidResponse("boom".to_string())));

        let packages = vec![
            PackageRef::new("ok-pkg", "1.0.0"),
            PackageRef::new("broken-pkg", "2.0.0"),
        ];

        let results = resolve_all(&registry, packages, 2).await;

        assert_eq!(results.len(), 2);
        assert!(results.contains(&ResolutionResult::Resolved {
            name: "ok-pkg".to_string(),
            version: "1.0.0".to_string(),
            deprecation: None,
        }));
        assert!(results.contains(&ResolutionResult::Failed {
            name: "broken-pkg".to_string(),
        }));
    }

    #[tokio::test]
    async fn resolve_all_carries_deprecation_message() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_document()
            .times(1)
            .returning(|_| {
                Ok(document_with_version(
                    "left-pad",
                    "1.3.0",
                    Some("please stop using this"),
                ))
            });

        let results = resolve_all(&registry, vec![PackageRef::new("left-pad", "1.3.0")], 1).await;

        assert_eq!(
            results,
            vec![ResolutionResult::Resolved {
                name: "left-pad".to_string(),
                version: "1.3.0".to_string(),
                deprecation: Some("please stop using this".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn resolve_all_converts_missing_version_to_failure() {
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_document()
            .times(1)
            .returning(|_| Ok(document_with_version("some-pkg", "1.0.0", None)));

        let results = resolve_all(&registry, vec![PackageRef::new("some-pkg", "9.9.9")], 1).await;

        assert_eq!(
            results,
            vec![ResolutionResult::Failed {
                name: "some-pkg".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn resolve_all_handles_empty_input() {
        let mut registry = MockRegistry::new();
        registry.expect_fetch_document().times(0);

        let results = resolve_all(&registry, vec![], 4).await;

        assert!(results.is_empty());
    }

    /// Registry that records the peak number of concurrently in-flight fetches
    struct ConcurrencyProbe {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl ConcurrencyProbe {
        fn new() -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl Registry for ConcurrencyProbe {
        async fn fetch_document(
            &self,
            package_name: &str,
        ) -> Result<RegistryDocument, RegistryError> {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(current, Ordering::SeqCst);
            sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(document_with_version(package_name, "1.0.0", None))
        }
    }

    #[tokio::test]
    async fn resolve_all_never_exceeds_concurrency_limit() {
        let registry = ConcurrencyProbe::new();
        let packages: Vec<_> = (0..10)
            .map(|i| PackageRef::new(&format!("pkg-{}", i), "1.0.0"))
            .collect();

        let results = resolve_all(&registry, packages, 3).await;

        assert_eq!(results.len(), 10);
        assert!(registry.peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn resolve_all_treats_zero_limit_as_one() {
        let registry = ConcurrencyProbe::new();
        let packages = vec![
            PackageRef::new("pkg-a", "1.0.0"),
            PackageRef::new("pkg-b", "1.0.0"),
        ];

        let results = resolve_all(&registry, packages, 0).await;

        assert_eq!(results.len(), 2);
        assert_eq!(registry.peak.load(Ordering::SeqCst), 1);
    }
}
