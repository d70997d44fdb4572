//! End-to-end read-path flow: miss -> compute -> insert -> hit -> expiry,
//! with the background sweep running, using JSON payloads the way the
//! dashboard handlers do.

use aisle_cache::TagCache;
use aisle_domain::{cache_key, couple_tag, entity_tag, CacheSettings, Entity};
use aisle_jobs::SweepJob;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

mod common;

/// Stand-in for the database query behind a dashboard read.
fn load_guest_summary(couple_id: &str, queries: &mut usize) -> Value {
    *queries += 1;
    json!({ "couple": couple_id, "confirmed": 42, "pending": 7 })
}

#[tokio::test]
async fn test_read_path_caches_computed_aggregate() {
    common::init_tracing();
    let cache: TagCache<Value> = TagCache::default();
    let key = cache_key(Entity::Guests, "c1");
    let tags = vec![entity_tag(Entity::Guests, "c1"), couple_tag("c1")];
    let mut queries = 0;

    // First read misses and computes
    let value = match cache.get(&key) {
        Some(hit) => hit,
        None => {
            let computed = load_guest_summary("c1", &mut queries);
            cache.insert(&key, computed, Duration::from_secs(5), &tags);
            cache.get(&key).unwrap()
        }
    };
    assert_eq!(value["confirmed"], 42);
    assert_eq!(queries, 1);

    // Second read hits; no query
    let hit = cache.get(&key).expect("entry should still be live");
    assert_eq!(hit["couple"], "c1");
    assert_eq!(queries, 1);
    assert_eq!(cache.metrics().hits.load(std::sync::atomic::Ordering::Relaxed), 2);
}

#[tokio::test]
async fn test_expired_aggregate_is_recomputed() {
    common::init_tracing();
    let cache: TagCache<Value> = TagCache::default();
    let key = cache_key(Entity::Budget, "c1");
    let mut queries = 0;

    cache.insert(
        &key,
        load_guest_summary("c1", &mut queries),
        Duration::from_millis(20),
        &[entity_tag(Entity::Budget, "c1")],
    );

    sleep(Duration::from_millis(30)).await;

    // Read path sees a miss and recomputes
    assert!(cache.get(&key).is_none());
    cache.insert(
        &key,
        load_guest_summary("c1", &mut queries),
        Duration::from_secs(5),
        &[entity_tag(Entity::Budget, "c1")],
    );
    assert_eq!(queries, 2);
    assert!(cache.get(&key).is_some());
}

#[tokio::test]
async fn test_sweep_bounds_cold_keys() {
    common::init_tracing();
    // Keys that expire and are never read again must still be reclaimed.
    let cache: Arc<TagCache<Value>> = Arc::new(TagCache::default());
    for i in 0..20 {
        cache.insert(
            &format!("photos-c{i}"),
            json!({ "count": i }),
            Duration::from_millis(10),
            &[couple_tag(&format!("c{i}"))],
        );
    }

    let token = CancellationToken::new();
    let job = Arc::new(
        SweepJob::new(cache.clone())
            .with_interval(Duration::from_millis(25))
            .with_cancellation(token.clone()),
    );
    job.start().await;

    sleep(Duration::from_millis(100)).await;
    token.cancel();

    let stats = cache.stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.tags, 0);
}

#[tokio::test]
async fn test_stats_snapshot_serializes_for_admin_endpoint() {
    common::init_tracing();
    let settings = CacheSettings {
        max_stats_entries: 10,
        ..CacheSettings::default()
    };
    let cache: TagCache<Value> = TagCache::new(&settings);
    cache.insert(
        &cache_key(Entity::Guests, "c1"),
        json!({ "confirmed": 42 }),
        Duration::from_secs(5),
        &[entity_tag(Entity::Guests, "c1"), couple_tag("c1")],
    );

    let rendered = serde_json::to_value(cache.stats()).unwrap();
    assert_eq!(rendered["size"], 1);
    assert_eq!(rendered["tags"], 2);
    assert_eq!(rendered["entries"][0]["key"], "guests-c1");
    assert_eq!(rendered["entries"][0]["ttl_ms"], 5000);
    assert_eq!(
        rendered["entries"][0]["tags"],
        json!(["couple:c1", "guests:c1"])
    );
}
