//! Contract harness configuration loaded from environment variables.

use std::time::Duration;

/// Public v1 API root (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1/";

/// Upper bound on a single request so a stalled upstream cannot hang a run.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// All configuration for the contract harness.
///
/// Loaded from env vars after `dotenv::dotenv().ok()`; CLI flags in `main`
/// override individual values. All values have safe defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// API root that `search.php` is resolved against (`COCKTAILDB_BASE_URL`).
    /// default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Per-request timeout (`COCKTAILDB_TIMEOUT_SECS`).
    /// default: [`DEFAULT_TIMEOUT_SECS`]
    pub request_timeout: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable or zero timeouts fall
    /// back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("COCKTAILDB_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            request_timeout: lookup("COCKTAILDB_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}
