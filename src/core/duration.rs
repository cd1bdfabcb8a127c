//! Duration unit resolution
//!
//! A duration attribute picks its time unit from the key suffix when one is
//! present, and from the magnitude of the value otherwise. Magnitude
//! selection appends the chosen unit suffix to the key and re-enters the
//! suffix match, so both paths converge on the same table.

use super::attr::Attr;
use super::config::DurationFormat;
use std::time::Duration;

/// Time unit a duration renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Millis,
    Micros,
}

impl TimeUnit {
    /// Textual abbreviation appended to values under
    /// [`DurationFormat::ValueWithUnits`].
    pub fn abbrev(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Millis => "ms",
            TimeUnit::Micros => "us",
        }
    }

    /// Convert an exact duration into this unit.
    pub fn convert(&self, d: Duration) -> f64 {
        match self {
            TimeUnit::Seconds => d.as_secs_f64(),
            TimeUnit::Millis => d.as_secs_f64() * 1e3,
            TimeUnit::Micros => d.as_secs_f64() * 1e6,
        }
    }
}

/// Recognized key suffixes. Mutually exclusive by construction, so match
/// order does not matter.
const SUFFIXES: &[(&str, TimeUnit)] = &[
    ("_s", TimeUnit::Seconds),
    ("_sec", TimeUnit::Seconds),
    ("_ms", TimeUnit::Millis),
    ("_msec", TimeUnit::Millis),
    ("_us", TimeUnit::Micros),
    ("_usec", TimeUnit::Micros),
    ("_\u{b5}s", TimeUnit::Micros),
    ("_\u{b5}sec", TimeUnit::Micros),
];

/// Result of resolving a duration attribute's unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Key carrying a unit suffix (the original, or the auto-appended one).
    pub key: String,
    /// Duration converted into the resolved unit.
    pub value: f64,
    pub unit: TimeUnit,
    /// Character length of the unit suffix at the end of `key`.
    suffix_chars: usize,
}

impl Resolved {
    /// The key with its unit suffix removed.
    pub fn bare_key(&self) -> String {
        let keep = self.key.chars().count() - self.suffix_chars;
        self.key.chars().take(keep).collect()
    }
}

fn match_suffix(key: &str) -> Option<(TimeUnit, usize)> {
    let lowered = key.to_lowercase();
    SUFFIXES
        .iter()
        .find(|(suffix, _)| lowered.ends_with(suffix))
        .map(|(suffix, unit)| (*unit, suffix.chars().count()))
}

/// Resolve the unit for a duration attribute.
///
/// Keys with a recognized suffix keep their name; otherwise a suffix is
/// chosen from the magnitude (whole-zero seconds under one millisecond are
/// microseconds, whole-zero seconds at or above one millisecond are
/// milliseconds, anything with whole seconds is seconds) and appended.
pub fn resolve(key: &str, duration: Duration) -> Resolved {
    if let Some((unit, suffix_chars)) = match_suffix(key) {
        return Resolved {
            key: key.to_string(),
            value: unit.convert(duration),
            unit,
            suffix_chars,
        };
    }

    let suffix = if duration.as_secs() == 0 && duration.subsec_nanos() >= 1_000_000 {
        "_ms"
    } else if duration.as_secs() == 0 {
        "_us"
    } else {
        "_s"
    };

    // One append always lands on the table, so this recurses exactly once.
    resolve(&format!("{key}{suffix}"), duration)
}

/// Rewrite a duration attribute according to the configured rendering.
pub fn apply(key: &str, duration: Duration, format: &DurationFormat) -> Attr {
    let resolved = resolve(key, duration);
    match format {
        DurationFormat::KeyWithUnits => Attr::float(resolved.key.clone(), resolved.value),
        DurationFormat::ValueWithUnits => Attr::string(
            resolved.bare_key(),
            format!("{}{}", float_text(resolved.value), resolved.unit.abbrev()),
        ),
        DurationFormat::Dimensionless => Attr::float(resolved.bare_key(), resolved.value),
    }
}

/// Float rendering that always carries a decimal point, matching the JSON
/// projection of float attributes.
pub(crate) fn float_text(f: f64) -> String {
    if f.is_finite() && f == f.trunc() {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}
