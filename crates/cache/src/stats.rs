use serde::Serialize;

/// Point-in-time snapshot of cache contents for introspection endpoints.
///
/// Ages and TTLs are computed against the clock at snapshot time; the data is
/// stale the moment it is returned.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Number of entries physically present (including expired entries not
    /// yet reclaimed by a sweep or a lazy `get`)
    pub size: usize,

    /// Number of distinct tags in the index
    pub tags: usize,

    /// Per-entry detail, capped by `max_stats_entries` in config
    pub entries: Vec<EntryStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryStats {
    pub key: String,
    pub age_ms: u64,
    pub ttl_ms: u64,
    pub tags: Vec<String>,
}
