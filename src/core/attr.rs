//! Attribute model for structured log entries
//!
//! An [`Attr`] is a typed key/value pair. Attributes form ordered lists, not
//! sets: the same key may appear more than once, and whether duplicates
//! survive to the output is decided by the formatter's `strict` flag, not
//! here. Groups nest attributes to arbitrary depth.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Capability to encode an opaque user value as a JSON value.
///
/// This is the escape hatch behind [`Attr::any`]: the formatter calls
/// `to_json` at render time and embeds the result verbatim. A panicking
/// implementation propagates to the caller of the formatter; encoding
/// failures are treated as programming errors, not runtime conditions.
pub trait ToJson: Send + Sync {
    fn to_json(&self) -> Value;
}

impl<F> ToJson for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn to_json(&self) -> Value {
        self()
    }
}

/// A single typed attribute.
#[derive(Clone)]
pub enum Attr {
    String { key: String, value: String },
    Int { key: String, value: i64 },
    Float { key: String, value: f64 },
    Bool { key: String, value: bool },
    /// Stored as an exact (seconds, nanoseconds) pair; no float rounding
    /// happens until the unit resolver renders it.
    Duration { key: String, value: Duration },
    Group { key: String, children: Vec<Attr> },
    Any { key: String, value: Arc<dyn ToJson> },
}

/// Scalar attribute payload, used by [`Attr::new`] so call sites can pass
/// native Rust values directly.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(f: f64) -> Self {
        AttrValue::Float(f)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<Duration> for AttrValue {
    fn from(d: Duration) -> Self {
        AttrValue::Duration(d)
    }
}

impl Attr {
    /// Build a scalar attribute from any native value convertible to
    /// [`AttrValue`].
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let key = key.into();
        match value.into() {
            AttrValue::Str(value) => Attr::String { key, value },
            AttrValue::Int(value) => Attr::Int { key, value },
            AttrValue::Float(value) => Attr::Float { key, value },
            AttrValue::Bool(value) => Attr::Bool { key, value },
            AttrValue::Duration(value) => Attr::Duration { key, value },
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attr::String {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Attr::Int {
            key: key.into(),
            value,
        }
    }

    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Attr::Float {
            key: key.into(),
            value,
        }
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Attr::Bool {
            key: key.into(),
            value,
        }
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Attr::Duration {
            key: key.into(),
            value,
        }
    }

    pub fn group(key: impl Into<String>, children: Vec<Attr>) -> Self {
        Attr::Group {
            key: key.into(),
            children,
        }
    }

    /// Attribute carrying an opaque value and its JSON encoder.
    pub fn any(key: impl Into<String>, value: Arc<dyn ToJson>) -> Self {
        Attr::Any {
            key: key.into(),
            value,
        }
    }

    /// Sentinel marking a synthetic attribute as "omit from output".
    ///
    /// The empty key is invalid everywhere else and is filtered out before
    /// serialization.
    pub fn omitted() -> Self {
        Attr::String {
            key: String::new(),
            value: String::new(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Attr::String { key, .. }
            | Attr::Int { key, .. }
            | Attr::Float { key, .. }
            | Attr::Bool { key, .. }
            | Attr::Duration { key, .. }
            | Attr::Group { key, .. }
            | Attr::Any { key, .. } => key,
        }
    }

    /// True for the empty-key sentinel produced by [`Attr::omitted`].
    pub fn is_omitted(&self) -> bool {
        self.key().is_empty()
    }
}

impl fmt::Debug for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::String { key, value } => write!(f, "String({:?}, {:?})", key, value),
            Attr::Int { key, value } => write!(f, "Int({:?}, {})", key, value),
            Attr::Float { key, value } => write!(f, "Float({:?}, {})", key, value),
            Attr::Bool { key, value } => write!(f, "Bool({:?}, {})", key, value),
            Attr::Duration { key, value } => write!(f, "Duration({:?}, {:?})", key, value),
            Attr::Group { key, children } => write!(f, "Group({:?}, {:?})", key, children),
            Attr::Any { key, .. } => write!(f, "Any({:?}, ..)", key),
        }
    }
}
