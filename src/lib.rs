//! deprecheck audits a project's locked npm dependencies against the
//! registry and reports deprecated versions and failed lookups.

pub mod audit;
pub mod config;
pub mod manifest;
