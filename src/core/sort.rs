//! Key-priority ordering
//!
//! Final pairs can be reordered by a caller-supplied priority list. Keys in
//! the list sort by their list index and come before keys outside it; keys
//! outside the list compare lexically. An empty priority list leaves the
//! input order untouched.

use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Reorder pairs by the priority list. No-op when `priority` is empty.
pub fn sort_pairs(pairs: &mut [(String, Value)], priority: &[String]) {
    if priority.is_empty() {
        return;
    }

    let index: HashMap<&str, usize> = priority
        .iter()
        .enumerate()
        .map(|(i, key)| (key.as_str(), i))
        .collect();

    pairs.sort_by(|(a, _), (b, _)| {
        match (index.get(a.as_str()), index.get(b.as_str())) {
            (Some(i), Some(j)) => i.cmp(j),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });
}
