//! Partitioning of resolution results into report buckets

use crate::audit::engine::ResolutionResult;

/// One deprecated dependency in the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecatedPackage {
    pub name: String,
    pub version: String,
    pub message: String,
}

/// The audit report: deprecated versions and failed lookups.
///
/// Clean successes are intentionally absent; the report only lists
/// exceptions.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub deprecated: Vec<DeprecatedPackage>,
    pub errored: Vec<String>,
}

/// Partitions resolution results into the two report buckets, preserving
/// the engine's output order within each bucket.
pub fn build_report(results: Vec<ResolutionResult>) -> Report {
    let mut report = Report::default();

    for result in results {
        match result {
            ResolutionResult::Resolved {
                name,
                version,
                deprecation: Some(message),
            } => report.deprecated.push(DeprecatedPackage {
                name,
                version,
                message,
            }),
            // Clean successes are dropped
            ResolutionResult::Resolved { .. } => {}
            ResolutionResult::Failed { name } => report.errored.push(name),
        }
    }

    report
}
