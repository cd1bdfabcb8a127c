//! Duplicate-key collapsing
//!
//! Applied only under `strict` configuration. A repeated key keeps the
//! position of its first occurrence but holds the value of its last
//! occurrence. Input pairs arrive oldest attribute first, so "last
//! occurrence" is the attribute most recently added on the logger.

use indexmap::IndexMap;
use serde_json::Value;

/// Collapse pairs to one entry per exact key, sticky position, last write
/// wins. `IndexMap::insert` updates the value in place without moving the
/// key, which is precisely the required semantics.
pub fn dedupe(pairs: Vec<(String, Value)>) -> Vec<(String, Value)> {
    let mut map: IndexMap<String, Value> = IndexMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        map.insert(key, value);
    }
    map.into_iter().collect()
}
