use serde::Deserialize;
use std::path::Path;

use anyhow::Context;

/// Default base URL for the npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default number of concurrently in-flight registry requests
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 2;

/// Default cap on idle pooled connections per registry host
pub const DEFAULT_MAX_IDLE_CONNECTIONS: usize = 10;

/// Default TCP keep-alive interval for pooled connections (seconds)
pub const DEFAULT_KEEPALIVE_SECS: u64 = 60;

/// Optional per-project configuration file name
pub const CONFIG_FILE_NAME: &str = ".deprecheckrc.json";

/// Audit configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditConfig {
    /// Maximum number of fetch+resolve tasks in flight at once
    pub concurrency_limit: usize,
    /// Registry base URL
    pub registry_url: String,
    pub pool: PoolConfig,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            pool: PoolConfig::default(),
        }
    }
}

/// Connection pool configuration
///
/// The idle connection cap should be at least as large as the concurrency
/// limit so that concurrent requests do not contend for sockets.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolConfig {
    pub max_idle_connections: usize,
    pub keepalive_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            keepalive_secs: DEFAULT_KEEPALIVE_SECS,
        }
    }
}

impl AuditConfig {
    /// Loads configuration from `.deprecheckrc.json` in the project directory,
    /// falling back to defaults when the file does not exist.
    pub fn load(project_dir: &Path) -> anyhow::Result<Self> {
        let path = project_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
