//! Deterministic cache key and tag builders.
//!
//! Keys (`<entity>-<id>`) address a single cached read; tags (`<entity>:<id>`,
//! `couple:<id>`, `user:<id>`) group entries for bulk invalidation. Pure
//! string builders: no state, no validation — a malformed id produces a key
//! that simply never hits.

/// Couple-owned entity kinds that get cached dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Guests,
    Budget,
    Expenses,
    Vendors,
    Checklist,
    Photos,
    Messages,
    Timeline,
}

impl Entity {
    /// Every entity kind, in no meaningful order. Used by the invalidation
    /// facade to fan out over a couple's whole tag space.
    pub const ALL: [Entity; 8] = [
        Entity::Guests,
        Entity::Budget,
        Entity::Expenses,
        Entity::Vendors,
        Entity::Checklist,
        Entity::Photos,
        Entity::Messages,
        Entity::Timeline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Guests => "guests",
            Entity::Budget => "budget",
            Entity::Expenses => "expenses",
            Entity::Vendors => "vendors",
            Entity::Checklist => "checklist",
            Entity::Photos => "photos",
            Entity::Messages => "messages",
            Entity::Timeline => "timeline",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical cache key for a couple-scoped read, e.g. `guests-c1`.
#[inline]
pub fn cache_key(entity: Entity, couple_id: &str) -> String {
    format!("{}-{}", entity.as_str(), couple_id)
}

/// Entity-scoped invalidation tag, e.g. `guests:c1`.
#[inline]
pub fn entity_tag(entity: Entity, couple_id: &str) -> String {
    format!("{}:{}", entity.as_str(), couple_id)
}

/// Couple-wide invalidation tag, e.g. `couple:c1`. Attached alongside the
/// entity tag so "everything for this couple changed" is a single tag hit.
#[inline]
pub fn couple_tag(couple_id: &str) -> String {
    format!("couple:{}", couple_id)
}

/// User-scoped invalidation tag, e.g. `user:u1`.
#[inline]
pub fn user_tag(user_id: &str) -> String {
    format!("user:{}", user_id)
}
