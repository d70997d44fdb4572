use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Cache metrics
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub removals: AtomicU64,
    pub lazy_deletions: AtomicU64,
    pub tag_invalidations: AtomicU64,
    pub pattern_invalidations: AtomicU64,
    pub sweeps: AtomicU64,
}

impl CacheMetrics {
    /// Hit rate as a percentage of all lookups
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}
