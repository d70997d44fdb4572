use crate::entry::CacheEntry;
use crate::metrics::CacheMetrics;
use crate::stats::{CacheStats, EntryStats};
use crate::tag_index::TagIndex;
use aisle_domain::CacheSettings;
use fancy_regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Entry map and tag index, guarded together.
///
/// `insert` unlinks the previous entry's tags and indexes the new ones; that
/// sequence spans both structures and must not interleave with another
/// writer, so a single store-wide lock guards the pair rather than each
/// structure separately.
struct CacheInner<V> {
    entries: FxHashMap<String, CacheEntry<V>>,
    tags: TagIndex,
}

/// In-process key-value cache with TTL expiry and tag-based invalidation.
///
/// Values are handed out as shared `Arc`s: `get` never copies the value, and
/// callers cannot mutate it in place, so the cached data stays intact no
/// matter what readers do with their handle.
///
/// An expired entry may linger physically until the next `get` of its key or
/// the next [`cleanup`](TagCache::cleanup) pass reclaims it; it is never
/// served.
pub struct TagCache<V> {
    inner: RwLock<CacheInner<V>>,
    metrics: Arc<CacheMetrics>,
    default_ttl: Duration,
    max_stats_entries: usize,
}

impl<V> TagCache<V> {
    pub fn new(settings: &CacheSettings) -> Self {
        info!(
            default_ttl_ms = settings.default_ttl_ms,
            max_stats_entries = settings.max_stats_entries,
            "Initializing tag cache"
        );

        Self {
            inner: RwLock::new(CacheInner {
                entries: FxHashMap::default(),
                tags: TagIndex::new(),
            }),
            metrics: Arc::new(CacheMetrics::default()),
            default_ttl: Duration::from_millis(settings.default_ttl_ms),
            max_stats_entries: settings.max_stats_entries,
        }
    }

    /// Insert or replace the entry for `key`.
    ///
    /// A replaced entry's tag memberships are unlinked before the new tags
    /// are indexed, so overwriting never leaks stale tag membership.
    pub fn insert(&self, key: &str, value: V, ttl: Duration, tags: &[String]) {
        let mut inner = self.inner.write().unwrap();

        if let Some(old) = inner.entries.remove(key) {
            let old_tags = old.tags;
            inner.tags.unlink(key, &old_tags);
        }

        let entry = CacheEntry::new(value, ttl, tags);
        inner.tags.link(key, &entry.tags);
        inner.entries.insert(key.to_string(), entry);

        self.metrics
            .insertions
            .fetch_add(1, AtomicOrdering::Relaxed);

        debug!(
            key = %key,
            ttl_ms = ttl.as_millis() as u64,
            tags = tags.len(),
            cache_size = inner.entries.len(),
            "Inserted into cache"
        );
    }

    /// Insert with the configured default TTL.
    pub fn insert_default(&self, key: &str, value: V, tags: &[String]) {
        self.insert(key, value, self.default_ttl, tags);
    }

    /// Get the value for `key`, or `None` on miss or expiry.
    ///
    /// Expiry is lazy: hitting an expired entry removes it and its tag
    /// memberships before reporting the miss.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        {
            let inner = self.inner.read().unwrap();
            match inner.entries.get(key) {
                Some(entry) if !entry.is_expired(Instant::now()) => {
                    self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                    debug!(key = %key, "Cache hit");
                    return Some(Arc::clone(&entry.value));
                }
                Some(_) => {} // expired, reclaim below under the write lock
                None => {
                    self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                    return None;
                }
            }
        }

        // Re-check under the write lock: the entry may have been removed or
        // replaced with a live one since the read guard dropped.
        let mut inner = self.inner.write().unwrap();
        match inner.entries.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                Some(Arc::clone(&entry.value))
            }
            Some(_) => {
                if let Some(entry) = inner.entries.remove(key) {
                    inner.tags.unlink(key, &entry.tags);
                }
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                self.metrics
                    .lazy_deletions
                    .fetch_add(1, AtomicOrdering::Relaxed);
                debug!(key = %key, "Cache entry expired (lazy)");
                None
            }
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    /// Remove the entry for `key`. Returns whether a removal occurred.
    pub fn remove(&self, key: &str) -> bool {
        let mut inner = self.inner.write().unwrap();
        match inner.entries.remove(key) {
            Some(entry) => {
                inner.tags.unlink(key, &entry.tags);
                self.metrics.removals.fetch_add(1, AtomicOrdering::Relaxed);
                true
            }
            None => false,
        }
    }

    /// Remove every entry carrying `tag`. Returns the number removed;
    /// an absent tag is a normal zero, not an error.
    pub fn invalidate_tag(&self, tag: &str) -> usize {
        let mut inner = self.inner.write().unwrap();
        let keys = inner.tags.take(tag);

        let mut removed = 0;
        for key in &keys {
            if let Some(entry) = inner.entries.remove(key) {
                // Unlink the entry's remaining tags; the taken tag's slot is
                // already gone and unlink tolerates that.
                inner.tags.unlink(key, &entry.tags);
                removed += 1;
            }
        }

        if removed > 0 {
            self.metrics
                .tag_invalidations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
            debug!(
                tag = %tag,
                removed,
                cache_size = inner.entries.len(),
                "Invalidated by tag"
            );
        }

        removed
    }

    /// Remove every entry whose key matches `pattern` (unanchored search).
    ///
    /// An invalid pattern is rejected and treated as zero matches — a bad
    /// admin-supplied pattern must not take down a request path.
    pub fn invalidate_pattern(&self, pattern: &str) -> usize {
        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(error) => {
                warn!(
                    pattern = %pattern,
                    error = %error,
                    "Rejected invalid invalidation pattern"
                );
                return 0;
            }
        };

        let mut inner = self.inner.write().unwrap();
        let matched: Vec<String> = inner
            .entries
            .keys()
            .filter(|key| regex.is_match(key).unwrap_or(false))
            .cloned()
            .collect();

        let mut removed = 0;
        for key in &matched {
            if let Some(entry) = inner.entries.remove(key) {
                inner.tags.unlink(key, &entry.tags);
                removed += 1;
            }
        }

        if removed > 0 {
            self.metrics
                .pattern_invalidations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
            debug!(
                pattern = %pattern,
                removed,
                cache_size = inner.entries.len(),
                "Invalidated by pattern"
            );
        }

        removed
    }

    /// Sweep out every expired entry. Returns the number removed.
    ///
    /// Complements lazy expiry: bounds memory from keys that are never read
    /// again after expiring. Intended for periodic background invocation.
    pub fn cleanup(&self) -> usize {
        let now = Instant::now();
        let mut inner = self.inner.write().unwrap();

        let expired: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        let mut removed = 0;
        for key in &expired {
            if let Some(entry) = inner.entries.remove(key) {
                inner.tags.unlink(key, &entry.tags);
                removed += 1;
            }
        }

        self.metrics.sweeps.fetch_add(1, AtomicOrdering::Relaxed);

        if removed > 0 {
            debug!(
                removed,
                cache_size = inner.entries.len(),
                "Sweep completed"
            );
        }

        removed
    }

    /// Remove all entries and the entire tag index.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.entries.clear();
        inner.tags.clear();
        info!("Cache cleared");
    }

    /// Snapshot of current contents. Entry detail is capped by
    /// `max_stats_entries`; `size` and `tags` always cover the whole store.
    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let inner = self.inner.read().unwrap();

        let mut entries: Vec<EntryStats> = inner
            .entries
            .iter()
            .map(|(key, entry)| {
                let mut tags: Vec<String> = entry.tags.iter().cloned().collect();
                tags.sort();
                EntryStats {
                    key: key.clone(),
                    age_ms: entry.age(now).as_millis() as u64,
                    ttl_ms: entry.ttl.as_millis() as u64,
                    tags,
                }
            })
            .collect();
        // Sort before capping so repeated snapshots show a stable prefix
        // rather than an arbitrary slice of hash-map iteration order.
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries.truncate(self.max_stats_entries);

        CacheStats {
            size: inner.entries.len(),
            tags: inner.tags.len(),
            entries,
        }
    }

    /// Number of entries physically present (expired-but-unreclaimed included)
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().entries.is_empty()
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}

impl<V> Default for TagCache<V> {
    fn default() -> Self {
        Self::new(&CacheSettings::default())
    }
}
