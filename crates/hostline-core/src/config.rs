//! Loader Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry policy for lazily loaded modules
///
/// Fixed when a loader is created; a loader never changes its own policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Retries after the first attempt (total attempts = retries + 1)
    #[serde(default = "default_retries")]
    pub retries: u32,

    /// Wait between a failed attempt and the next one, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

const fn default_retries() -> u32 {
    3
}

const fn default_interval_ms() -> u64 {
    1000
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl LoaderConfig {
    pub const fn new(retries: u32, interval_ms: u64) -> Self {
        Self { retries, interval_ms }
    }

    /// Read `HOSTLINE_LOAD_RETRIES` and `HOSTLINE_LOAD_INTERVAL_MS`,
    /// falling back to defaults for missing or unparsable values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let retries = std::env::var("HOSTLINE_LOAD_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.retries);
        let interval_ms = std::env::var("HOSTLINE_LOAD_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.interval_ms);

        Self { retries, interval_ms }
    }

    /// Inter-attempt delay as a `Duration`
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Upper bound on factory invocations for one handle
    pub const fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}
