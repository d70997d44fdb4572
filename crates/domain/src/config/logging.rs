use serde::{Deserialize, Serialize};

/// Logging configuration
///
/// Seeds the tracing env-filter for whatever hosts the cache — a worker
/// binary or the integration-test harness. `RUST_LOG`, when set, takes
/// precedence over the configured level.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Base log level applied when `RUST_LOG` is unset (default: "info")
    /// Options: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Env-filter directive for this configuration, e.g. `"aisle_cache=debug"`
    /// scoped to the given crate, or the bare level when `scope` is `None`.
    pub fn directive(&self, scope: Option<&str>) -> String {
        match scope {
            Some(target) => format!("{}={}", target, self.level),
            None => self.level.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
