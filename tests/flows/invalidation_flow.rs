//! Write-path invalidation flows across couples, tags, and key patterns.

use aisle_cache::{invalidate_couple, invalidate_entity, TagCache};
use aisle_domain::{cache_key, couple_tag, entity_tag, Entity};
use serde_json::{json, Value};
use std::time::Duration;

mod common;

const TTL: Duration = Duration::from_secs(1);

#[test]
fn test_guest_mutation_leaves_budget_cached() {
    common::init_tracing();
    // The concrete scenario: guests and budget cached for the same couple,
    // then only the guests tag is invalidated.
    let cache: TagCache<Value> = TagCache::default();
    cache.insert(
        "guests-c1",
        json!([{ "name": "g1" }]),
        TTL,
        &["guests:c1".to_string(), "couple:c1".to_string()],
    );
    cache.insert(
        "budget-c1",
        json!({ "total": 12000 }),
        TTL,
        &["budget:c1".to_string(), "couple:c1".to_string()],
    );

    assert_eq!(cache.invalidate_tag("guests:c1"), 1);
    assert!(cache.get("guests-c1").is_none());
    assert_eq!(cache.get("budget-c1").unwrap()["total"], 12000);
}

#[test]
fn test_couple_deletion_clears_every_aggregate() {
    common::init_tracing();
    let cache: TagCache<Value> = TagCache::default();
    for couple_id in ["c1", "c2"] {
        for entity in Entity::ALL {
            cache.insert(
                &cache_key(entity, couple_id),
                json!({ "couple": couple_id }),
                TTL,
                &[entity_tag(entity, couple_id), couple_tag(couple_id)],
            );
        }
    }

    let removed = invalidate_couple(&cache, "c1");
    assert_eq!(removed, Entity::ALL.len());

    // c2 untouched
    for entity in Entity::ALL {
        assert!(cache.get(&cache_key(entity, "c1")).is_none());
        assert!(cache.get(&cache_key(entity, "c2")).is_some());
    }
}

#[test]
fn test_entity_facade_matches_raw_tag_call() {
    common::init_tracing();
    let cache: TagCache<Value> = TagCache::default();
    cache.insert(
        &cache_key(Entity::Vendors, "c9"),
        json!([]),
        TTL,
        &[entity_tag(Entity::Vendors, "c9")],
    );

    assert_eq!(invalidate_entity(&cache, Entity::Vendors, "c9"), 1);
    assert_eq!(cache.invalidate_tag(&entity_tag(Entity::Vendors, "c9")), 0);
}

#[test]
fn test_pattern_invalidation_as_admin_tool() {
    common::init_tracing();
    let cache: TagCache<Value> = TagCache::default();
    cache.insert("guests-c1", json!([]), TTL, &[]);
    cache.insert("guests-c2", json!([]), TTL, &[]);
    cache.insert("budget-c1", json!({}), TTL, &[]);

    // Wipe every guests aggregate regardless of couple
    assert_eq!(cache.invalidate_pattern("^guests-"), 2);
    assert!(cache.get("budget-c1").is_some());

    // A typo'd pattern is rejected without touching the remaining entry
    assert_eq!(cache.invalidate_pattern("^guests-("), 0);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_overwrite_moves_entry_between_couples() {
    common::init_tracing();
    // Re-keying an aggregate to another couple must migrate its tag
    // membership, not accumulate it.
    let cache: TagCache<Value> = TagCache::default();
    cache.insert("shared-board", json!({}), TTL, &[couple_tag("c1")]);
    cache.insert("shared-board", json!({}), TTL, &[couple_tag("c2")]);

    assert_eq!(cache.invalidate_tag(&couple_tag("c1")), 0);
    assert_eq!(cache.invalidate_tag(&couple_tag("c2")), 1);
}
