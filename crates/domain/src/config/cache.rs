use serde::{Deserialize, Serialize};

/// Cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheSettings {
    /// Default TTL in milliseconds for entries inserted without an explicit
    /// TTL (default: 300000 = 5 minutes)
    #[serde(default = "default_ttl_ms")]
    pub default_ttl_ms: u64,

    /// Interval in seconds between background sweep passes (default: 60)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Maximum number of per-entry rows included in a stats snapshot
    /// (default: 100). Caps the cost of the admin introspection endpoint.
    #[serde(default = "default_max_stats_entries")]
    pub max_stats_entries: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_ttl_ms: default_ttl_ms(),
            sweep_interval_secs: default_sweep_interval_secs(),
            max_stats_entries: default_max_stats_entries(),
        }
    }
}

fn default_ttl_ms() -> u64 {
    300_000
}

fn default_sweep_interval_secs() -> u64 {
    60
}

fn default_max_stats_entries() -> usize {
    100
}
