//! Group flattening and leaf projection
//!
//! Walks a possibly nested attribute list depth-first, left to right, and
//! produces ordered `(dotted-key, JSON value)` pairs. A group's children are
//! spliced in place of the group, so output order is exactly the pre-order
//! traversal of the tree.

use super::attr::Attr;
use super::config::FormatConfig;
use super::duration;
use serde_json::Value;

/// Dot-join an optional prefix with a key.
pub fn join(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(p) => format!("{p}.{key}"),
        None => key.to_string(),
    }
}

/// Canonical JSON projection of a non-group attribute.
///
/// Durations are rewritten through the unit resolver first, which may rename
/// the key; the returned key is therefore the final one. Panics from a
/// user-supplied [`super::attr::ToJson`] encoder propagate to the caller.
pub fn leaf_pair(attr: &Attr, config: &FormatConfig) -> (String, Value) {
    match attr {
        Attr::String { key, value } => (key.clone(), Value::String(value.clone())),
        Attr::Int { key, value } => (key.clone(), Value::Number((*value).into())),
        Attr::Float { key, value } => (key.clone(), float_value(*value)),
        Attr::Bool { key, value } => (key.clone(), Value::Bool(*value)),
        Attr::Duration { key, value } => {
            let rewritten = duration::apply(key, *value, &config.duration_format);
            leaf_pair(&rewritten, config)
        }
        Attr::Any { key, value } => (key.clone(), value.to_json()),
        Attr::Group { .. } => unreachable!("groups are flattened before projection"),
    }
}

fn float_value(f: f64) -> Value {
    serde_json::Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Flatten an attribute list into ordered `(dotted-key, value)` pairs.
pub fn flatten(
    attrs: &[Attr],
    prefix: Option<&str>,
    config: &FormatConfig,
    out: &mut Vec<(String, Value)>,
) {
    for attr in attrs {
        match attr {
            Attr::Group { key, children } => {
                let child_prefix = join(prefix, key);
                flatten(children, Some(&child_prefix), config, out);
            }
            leaf => {
                let (key, value) = leaf_pair(leaf, config);
                out.push((join(prefix, &key), value));
            }
        }
    }
}
