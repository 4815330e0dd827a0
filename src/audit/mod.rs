//! Core audit pipeline: fetch registry metadata for each locked dependency,
//! resolve the exact locked version, and aggregate the outcome.
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching a package's metadata document
//! - [`npm`]: npm registry client with a pooled keep-alive connection
//! - [`resolver`]: exact-version lookup within a registry document
//! - [`engine`]: bounded-concurrency fan-out over all dependencies
//! - [`report`]: partitioning of resolution results into report buckets
//! - [`error`]: error types for registry operations
//! - [`types`]: common types like `PackageRef` and `RegistryDocument`

pub mod engine;
pub mod error;
pub mod npm;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod types;
