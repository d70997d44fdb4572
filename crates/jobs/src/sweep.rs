use aisle_cache::TagCache;
use aisle_domain::CacheSettings;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodic cache sweep.
///
/// Lazy expiry only reclaims entries that are read again; this job walks the
/// whole store on an interval so keys that go cold after expiring cannot
/// accumulate. Cadence is a deployment decision (`sweep_interval_secs`), not
/// part of the store contract — the cache never serves expired data either
/// way.
pub struct SweepJob<V> {
    cache: Arc<TagCache<V>>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl<V: Send + Sync + 'static> SweepJob<V> {
    pub fn new(cache: Arc<TagCache<V>>) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(60),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn from_settings(cache: Arc<TagCache<V>>, settings: &CacheSettings) -> Self {
        Self::new(cache).with_interval(Duration::from_secs(settings.sweep_interval_secs))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting cache sweep job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("SweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.cleanup();
                        if removed > 0 {
                            info!(removed, cache_size = self.cache.len(), "Sweep removed expired entries");
                        } else {
                            debug!("Sweep found nothing to remove");
                        }
                    }
                }
            }
        });
    }
}
