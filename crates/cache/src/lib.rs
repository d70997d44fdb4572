//! In-process cache with TTL expiry and tag-based invalidation.
//!
//! Dashboard aggregates are expensive to recompute, so read paths store them
//! here keyed by couple and entity; write paths invalidate by tag instead of
//! enumerating keys. Expiry is lazy (checked on `get`) plus a periodic sweep
//! (`aisle-jobs`) that bounds memory from keys never read again.
//!
//! Scope: strictly per-process. Each worker holds an independent instance and
//! invalidation does not propagate across processes — the resulting staleness
//! window is an accepted property of the deployment, bounded by the TTL.
//! Construct a [`TagCache`] explicitly at startup and share it via `Arc`;
//! there is no hidden global instance.

pub mod entry;
pub mod invalidation;
pub mod metrics;
pub mod stats;
pub mod storage;
pub mod tag_index;

pub use entry::CacheEntry;
pub use invalidation::{invalidate_couple, invalidate_entity, invalidate_user};
pub use metrics::CacheMetrics;
pub use stats::{CacheStats, EntryStats};
pub use storage::TagCache;
pub use tag_index::TagIndex;
