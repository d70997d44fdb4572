//! Domain-level invalidation helpers.
//!
//! Write paths call these after a successful mutation instead of spelling out
//! tag strings at every call site. Each helper fans out to independent,
//! idempotent `invalidate_tag` calls; order is irrelevant and none can fail.

use crate::storage::TagCache;
use aisle_domain::{couple_tag, entity_tag, user_tag, Entity};
use tracing::debug;

/// Invalidate the cached reads for one entity of one couple,
/// e.g. after a guest list mutation.
pub fn invalidate_entity<V>(cache: &TagCache<V>, entity: Entity, couple_id: &str) -> usize {
    let removed = cache.invalidate_tag(&entity_tag(entity, couple_id));
    debug!(entity = %entity, couple_id = %couple_id, removed, "Entity invalidated");
    removed
}

/// Invalidate everything cached for a couple: the couple-scope tag plus every
/// entity tag. Entries carrying several of these tags are removed (and
/// counted) once, by whichever tag reaches them first.
pub fn invalidate_couple<V>(cache: &TagCache<V>, couple_id: &str) -> usize {
    let mut removed = cache.invalidate_tag(&couple_tag(couple_id));
    for entity in Entity::ALL {
        removed += cache.invalidate_tag(&entity_tag(entity, couple_id));
    }
    debug!(couple_id = %couple_id, removed, "Couple invalidated");
    removed
}

/// Invalidate everything cached for a user account.
pub fn invalidate_user<V>(cache: &TagCache<V>, user_id: &str) -> usize {
    let removed = cache.invalidate_tag(&user_tag(user_id));
    debug!(user_id = %user_id, removed, "User invalidated");
    removed
}
