use rustc_hash::{FxHashMap, FxHashSet};

/// Reverse mapping from tag to the set of keys carrying it.
///
/// Derived data, never authoritative: the store maintains it incrementally so
/// that for every key `k` with tag `t`, `index[t]` contains `k` and vice
/// versa. Empty tag slots are dropped eagerly so the index never holds
/// dangling tags.
#[derive(Debug, Default)]
pub struct TagIndex {
    index: FxHashMap<String, FxHashSet<String>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` under every tag in `tags`.
    pub fn link(&mut self, key: &str, tags: &FxHashSet<String>) {
        for tag in tags {
            self.index
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }
    }

    /// Remove `key` from every tag in `tags`. Tolerates tags that were
    /// already dropped (e.g. by a concurrent `take` of the same tag).
    pub fn unlink(&mut self, key: &str, tags: &FxHashSet<String>) {
        for tag in tags {
            if let Some(keys) = self.index.get_mut(tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.index.remove(tag);
                }
            }
        }
    }

    /// Remove the tag's slot entirely, returning the keys it held.
    /// Absent tag yields an empty set, not an error.
    pub fn take(&mut self, tag: &str) -> FxHashSet<String> {
        self.index.remove(tag).unwrap_or_default()
    }

    /// Number of distinct tags currently indexed
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }

    #[cfg(test)]
    pub fn contains_key(&self, tag: &str, key: &str) -> bool {
        self.index.get(tag).is_some_and(|keys| keys.contains(key))
    }
}
