use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cached value with expiry metadata
#[derive(Clone, Debug)]
pub struct CacheEntry<V> {
    /// Shared handle to the cached value. `get` clones the `Arc`, never the
    /// value, so callers hold immutable views of the same allocation.
    pub value: Arc<V>,

    /// When this entry was inserted
    pub inserted_at: Instant,

    /// When this entry expires (lazy expiration)
    pub expires_at: Instant,

    /// TTL this entry was inserted with
    pub ttl: Duration,

    /// Tags this entry is grouped under for bulk invalidation
    pub tags: FxHashSet<String>,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, ttl: Duration, tags: &[String]) -> Self {
        let now = Instant::now();
        Self {
            value: Arc::new(value),
            inserted_at: now,
            expires_at: now + ttl,
            ttl,
            tags: tags.iter().cloned().collect(),
        }
    }

    /// Check if the entry is expired (lazy expiration)
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time since insertion, as observed at `now`
    #[inline]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }
}
