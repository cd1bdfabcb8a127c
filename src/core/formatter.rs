//! JSON and logfmt line assembly
//!
//! The formatter is a pure function of its inputs: timestamp, level,
//! message, attribute list and configuration in, one line of text out. It
//! owns the shared pipeline every grammar goes through: reverse the raw
//! attribute list to insertion order, prepend the synthetic time/level/msg
//! attributes, drop empty-key sentinels, resolve duration units, flatten
//! groups, optionally collapse duplicate keys, optionally sort.
//!
//! An empty result string means "no output"; it can only arise from the
//! bare-attribute variants, which inject no metadata.

use super::attr::Attr;
use super::config::{FormatConfig, TimeFormat};
use super::dedupe::dedupe;
use super::flatten::{flatten, leaf_pair};
use super::level::Level;
use super::sort::sort_pairs;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::sync::Arc;

/// Output grammar selection for a logger's sinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON object
    Json,
    /// Space-separated `key=value` tokens
    #[default]
    Logfmt,
    /// Human-oriented colorized line
    Term,
}

/// Ordered pair sequence rendered as a JSON object.
///
/// Serialized manually so the rendered key order equals the pair order, and
/// so duplicate keys survive to the text when `strict` is off.
struct JsonObject<'a>(&'a [(String, Value)]);

impl Serialize for JsonObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Stateless line formatter sharing one immutable configuration.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: Arc<FormatConfig>,
}

impl Formatter {
    pub fn new(config: Arc<FormatConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format a full JSON log line.
    pub fn format_json(
        &self,
        timestamp: DateTime<Utc>,
        level: Level,
        msg: &str,
        attrs: &[Attr],
    ) -> String {
        let ordered = self.ordered(attrs, Some(self.synthetic(timestamp, level, msg)));
        self.render_json(&ordered)
    }

    /// Format a full logfmt log line.
    pub fn format_logfmt(
        &self,
        timestamp: DateTime<Utc>,
        level: Level,
        msg: &str,
        attrs: &[Attr],
    ) -> String {
        let ordered = self.ordered(attrs, Some(self.synthetic(timestamp, level, msg)));
        render_logfmt(&self.finish(flat_pairs(&ordered, &self.config)))
    }

    /// Format a bare attribute line as JSON, with no forced metadata.
    /// Returns the empty string when there is nothing to emit.
    pub fn attrs_json(&self, attrs: &[Attr]) -> String {
        let ordered = self.ordered(attrs, None);
        self.render_json(&ordered)
    }

    /// Format a bare attribute line as logfmt, with no forced metadata.
    /// Returns the empty string when there is nothing to emit.
    pub fn attrs_logfmt(&self, attrs: &[Attr]) -> String {
        let ordered = self.ordered(attrs, None);
        render_logfmt(&self.finish(flat_pairs(&ordered, &self.config)))
    }

    /// Synthetic time/level/msg attributes, in their fixed injection order.
    fn synthetic(&self, timestamp: DateTime<Utc>, level: Level, msg: &str) -> [Attr; 3] {
        let time = match self.config.time_format {
            TimeFormat::Rfc3339 => {
                Attr::string(self.config.time_key.clone(), timestamp.to_rfc3339())
            }
            TimeFormat::UnixSeconds => Attr::string(
                self.config.time_key.clone(),
                timestamp.timestamp().to_string(),
            ),
            TimeFormat::UnixNanos => Attr::string(
                self.config.time_key.clone(),
                format!(
                    "{}{:09}",
                    timestamp.timestamp(),
                    timestamp.timestamp_subsec_nanos()
                ),
            ),
            TimeFormat::Omit => Attr::omitted(),
        };

        [
            time,
            Attr::string(self.config.level_key.clone(), level.to_str()),
            Attr::string(self.config.msg_key.clone(), msg),
        ]
    }

    /// Restore insertion order and prepend synthetics.
    ///
    /// The logger hands attributes most-recently-added first, so the raw
    /// list is reversed before anything else happens. Empty-key sentinels
    /// are dropped here, before serialization.
    fn ordered(&self, attrs: &[Attr], synthetic: Option<[Attr; 3]>) -> Vec<Attr> {
        let mut ordered = Vec::with_capacity(attrs.len() + 3);
        if let Some(synthetic) = synthetic {
            ordered.extend(synthetic);
        }
        ordered.extend(attrs.iter().rev().cloned());
        ordered.retain(|attr| !attr.is_omitted());
        ordered
    }

    /// Strict dedup then priority sort, shared by every grammar.
    fn finish(&self, mut pairs: Vec<(String, Value)>) -> Vec<(String, Value)> {
        if self.config.strict {
            pairs = dedupe(pairs);
        }
        sort_pairs(&mut pairs, &self.config.sort_order);
        pairs
    }

    fn render_json(&self, ordered: &[Attr]) -> String {
        let pairs = if self.config.flat {
            flat_pairs(ordered, &self.config)
        } else {
            nested_pairs(ordered, &self.config)
        };
        render_json(&self.finish(pairs))
    }
}

/// Fully flattened pairs, dotted keys for group members.
fn flat_pairs(ordered: &[Attr], config: &FormatConfig) -> Vec<(String, Value)> {
    let mut pairs = Vec::with_capacity(ordered.len());
    flatten(ordered, None, config, &mut pairs);
    pairs
}

/// Top-level pairs with groups rendered as nested JSON objects.
///
/// Descendant levels insert into a JSON map, so duplicates inside a group
/// collapse structurally regardless of the `strict` flag; the configured
/// flag only governs the chosen level.
fn nested_pairs(ordered: &[Attr], config: &FormatConfig) -> Vec<(String, Value)> {
    ordered
        .iter()
        .map(|attr| match attr {
            Attr::Group { key, children } => (key.clone(), nested_object(children, config)),
            leaf => leaf_pair(leaf, config),
        })
        .collect()
}

fn nested_object(children: &[Attr], config: &FormatConfig) -> Value {
    let mut map = serde_json::Map::new();
    for attr in children {
        if attr.is_omitted() {
            continue;
        }
        match attr {
            Attr::Group { key, children } => {
                map.insert(key.clone(), nested_object(children, config));
            }
            leaf => {
                let (key, value) = leaf_pair(leaf, config);
                map.insert(key, value);
            }
        }
    }
    Value::Object(map)
}

fn render_json(pairs: &[(String, Value)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    serde_json::to_string(&JsonObject(pairs)).unwrap_or_default()
}

/// Render pairs as `key=value` tokens joined by single spaces.
///
/// Values go through the JSON text projection first, so strings pick up
/// JSON escaping; the surrounding quotes are then stripped unless the quoted
/// text contains a literal space.
fn render_logfmt(pairs: &[(String, Value)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            let text = serde_json::to_string(value).unwrap_or_default();
            format!("{}={}", key, unquote(text))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn unquote(text: String) -> String {
    if !text.contains(' ') && text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text[1..text.len() - 1].to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DurationFormat;
    use chrono::TimeZone;
    use std::time::Duration;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap()
    }

    fn formatter(config: FormatConfig) -> Formatter {
        Formatter::new(config.shared())
    }

    #[test]
    fn test_empty_attrs_render_empty_string() {
        let f = formatter(FormatConfig::new());
        assert_eq!(f.attrs_json(&[]), "");
        assert_eq!(f.attrs_logfmt(&[]), "");
    }

    #[test]
    fn test_attrs_json_reverses_to_insertion_order() {
        // Raw list is most-recently-added first.
        let raw = vec![
            Attr::string("msg", "test"),
            Attr::int("test", 1),
            Attr::string("a", "b"),
        ];
        let f = formatter(FormatConfig::new().with_flat(false));
        assert_eq!(f.attrs_json(&raw), r#"{"a":"b","test":1,"msg":"test"}"#);
    }

    #[test]
    fn test_strict_json_group_collision() {
        // Group added last wins the top-level key under strict dedup.
        let raw = vec![
            Attr::group("a", vec![Attr::int("d", 2), Attr::string("e", "f")]),
            Attr::int("a", 1),
            Attr::string("a", "z"),
        ];
        let f = formatter(FormatConfig::new().with_strict(true).with_flat(false));
        assert_eq!(f.attrs_json(&raw), r#"{"a":{"d":2,"e":"f"}}"#);
    }

    #[test]
    fn test_strict_logfmt_group_collision() {
        // Flattening separates "a.d"/"a.e" from the scalar "a", so only the
        // scalars collide; the Int was added after the String and wins.
        let raw = vec![
            Attr::group("a", vec![Attr::int("d", 2), Attr::string("e", "f")]),
            Attr::int("a", 1),
            Attr::string("a", "z"),
        ];
        let f = formatter(FormatConfig::new().with_strict(true));
        assert_eq!(f.attrs_logfmt(&raw), "a=1 a.d=2 a.e=f");
    }

    #[test]
    fn test_duration_scenario_logfmt() {
        let raw = vec![
            Attr::duration("auto", Duration::from_millis(4)),
            Attr::duration("auto", Duration::from_millis(3200)),
            Attr::duration("t_ms", Duration::from_millis(200)),
            Attr::duration("t_sec", Duration::from_millis(2400)),
        ];
        let f = formatter(FormatConfig::new());
        assert_eq!(
            f.attrs_logfmt(&raw),
            "t_sec=2.4 t_ms=200.0 auto_s=3.2 auto_ms=4.0"
        );
    }

    #[test]
    fn test_logfmt_quotes_values_with_spaces() {
        let f = formatter(FormatConfig::new().with_time_format(TimeFormat::Omit));
        let line = f.format_logfmt(fixed_time(), Level::Info, "a message that should be quoted", &[]);
        assert_eq!(line, r#"level=INFO msg="a message that should be quoted""#);
    }

    #[test]
    fn test_logfmt_keeps_internal_escapes_when_unquoted() {
        let f = formatter(FormatConfig::new());
        let line = f.attrs_logfmt(&[Attr::string("k", "a\"b")]);
        assert_eq!(line, r#"k=a\"b"#);
    }

    #[test]
    fn test_json_full_line_with_rfc3339() {
        let f = formatter(FormatConfig::new());
        let line = f.format_json(fixed_time(), Level::Warn, "careful", &[Attr::int("n", 7)]);
        assert_eq!(
            line,
            r#"{"time":"2025-01-08T10:30:45+00:00","level":"WARN","msg":"careful","n":7}"#
        );
    }

    #[test]
    fn test_unix_seconds_time_is_string() {
        let f = formatter(FormatConfig::new().with_time_format(TimeFormat::UnixSeconds));
        let line = f.format_json(fixed_time(), Level::Info, "m", &[]);
        let ts = fixed_time().timestamp();
        assert_eq!(
            line,
            format!(r#"{{"time":"{ts}","level":"INFO","msg":"m"}}"#)
        );
    }

    #[test]
    fn test_unix_nanos_zero_padded() {
        let t = fixed_time() + chrono::Duration::nanoseconds(42);
        let f = formatter(FormatConfig::new().with_time_format(TimeFormat::UnixNanos));
        let line = f.format_logfmt(t, Level::Info, "m", &[]);
        let expected = format!("{}{:09}", t.timestamp(), 42);
        assert!(line.starts_with(&format!("time={expected}")), "line: {line}");
    }

    #[test]
    fn test_time_omit_drops_attribute() {
        let f = formatter(FormatConfig::new().with_time_format(TimeFormat::Omit));
        let line = f.format_json(fixed_time(), Level::Info, "m", &[]);
        assert_eq!(line, r#"{"level":"INFO","msg":"m"}"#);
    }

    #[test]
    fn test_custom_synthetic_keys() {
        let f = formatter(
            FormatConfig::new()
                .with_time_format(TimeFormat::Omit)
                .with_level_key("severity")
                .with_msg_key("message"),
        );
        let line = f.format_json(fixed_time(), Level::Error, "boom", &[]);
        assert_eq!(line, r#"{"severity":"ERROR","message":"boom"}"#);
    }

    #[test]
    fn test_flat_json_dotted_keys() {
        let raw = vec![Attr::group("a", vec![Attr::int("d", 2)])];
        let f = formatter(FormatConfig::new());
        assert_eq!(f.attrs_json(&raw), r#"{"a.d":2}"#);
    }

    #[test]
    fn test_lax_json_keeps_duplicate_keys() {
        let raw = vec![Attr::int("a", 2), Attr::int("a", 1)];
        let f = formatter(FormatConfig::new());
        assert_eq!(f.attrs_json(&raw), r#"{"a":1,"a":2}"#);
    }

    #[test]
    fn test_sort_order_applies_after_dedup() {
        let f = formatter(
            FormatConfig::new()
                .with_time_format(TimeFormat::Omit)
                .with_sort_order(vec!["msg".into(), "level".into()]),
        );
        let line = f.format_logfmt(fixed_time(), Level::Info, "m", &[Attr::int("b", 1)]);
        assert_eq!(line, "msg=m level=INFO b=1");
    }

    #[test]
    fn test_value_with_units_duration() {
        let f = formatter(FormatConfig::new().with_duration_format(DurationFormat::ValueWithUnits));
        let line = f.attrs_logfmt(&[Attr::duration("elapsed", Duration::from_millis(2))]);
        assert_eq!(line, "elapsed=2.0ms");
    }

    #[test]
    fn test_bool_and_float_tokens() {
        let f = formatter(FormatConfig::new());
        let raw = vec![Attr::float("rate", 0.5), Attr::bool("ok", true)];
        assert_eq!(f.attrs_logfmt(&raw), "ok=true rate=0.5");
    }
}
