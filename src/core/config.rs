//! Formatter configuration
//!
//! [`FormatConfig`] is built once at logger-construction time and is
//! read-only afterwards; it can be shared by reference across concurrent
//! format calls. All builder methods consume and return the config, so a
//! shared config is never mutated in place.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Rendering of the synthetic time attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// RFC 3339 string: `2025-01-08T10:30:45.123456+00:00`
    #[default]
    Rfc3339,

    /// Whole seconds since the Unix epoch, rendered as a string.
    UnixSeconds,

    /// Seconds concatenated with a zero-padded 9-digit nanosecond remainder.
    UnixNanos,

    /// No time attribute at all.
    Omit,
}

/// Rendering of duration attributes after unit resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationFormat {
    /// Float value keyed by the unit-suffixed name: `elapsed_ms=4.0`
    #[default]
    KeyWithUnits,

    /// Unit suffix moved from the key into the value: `elapsed="4.0ms"`
    ValueWithUnits,

    /// Bare float, unit discarded: `elapsed=4.0`
    Dimensionless,
}

/// Configuration for log formatting
///
/// # Examples
///
/// ```
/// use kvlog::core::{FormatConfig, TimeFormat};
///
/// let config = FormatConfig::new()
///     .with_strict(true)
///     .with_time_format(TimeFormat::UnixSeconds)
///     .with_sort_order(vec!["time".into(), "level".into(), "msg".into()]);
/// ```
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Collapse duplicate flattened keys (last value wins, first position kept)
    pub strict: bool,
    /// Flatten groups into dotted keys in JSON output; logfmt always flattens
    pub flat: bool,
    /// Key for the synthetic time attribute
    pub time_key: String,
    /// Key for the synthetic message attribute
    pub msg_key: String,
    /// Key for the synthetic level attribute
    pub level_key: String,
    /// Rendering of the synthetic time attribute
    pub time_format: TimeFormat,
    /// Rendering of duration attributes
    pub duration_format: DurationFormat,
    /// Explicit key priority for output ordering; empty keeps input order
    pub sort_order: Vec<String>,
    /// Terminal line width in grapheme clusters; 0 disables wrapping
    pub terminal_max_width: usize,
    /// Whether the terminal renderer emits ANSI colors
    pub terminal_colors: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            strict: false,
            flat: true,
            time_key: "time".to_string(),
            msg_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_format: TimeFormat::default(),
            duration_format: DurationFormat::default(),
            sort_order: Vec::new(),
            terminal_max_width: 0,
            terminal_colors: true,
        }
    }
}

impl FormatConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set duplicate-key collapsing
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set JSON group flattening (logfmt ignores this and always flattens)
    #[must_use]
    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Set the synthetic time attribute key
    #[must_use]
    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.time_key = key.into();
        self
    }

    /// Set the synthetic message attribute key
    #[must_use]
    pub fn with_msg_key(mut self, key: impl Into<String>) -> Self {
        self.msg_key = key.into();
        self
    }

    /// Set the synthetic level attribute key
    #[must_use]
    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.level_key = key.into();
        self
    }

    /// Set the time rendering format
    #[must_use]
    pub fn with_time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    /// Set the duration rendering format
    #[must_use]
    pub fn with_duration_format(mut self, format: DurationFormat) -> Self {
        self.duration_format = format;
        self
    }

    /// Set the explicit key priority list
    #[must_use]
    pub fn with_sort_order(mut self, order: Vec<String>) -> Self {
        self.sort_order = order;
        self
    }

    /// Set the terminal wrap width in grapheme clusters (0 disables wrapping)
    #[must_use]
    pub fn with_terminal_max_width(mut self, width: usize) -> Self {
        self.terminal_max_width = width;
        self
    }

    /// Enable or disable terminal colors
    #[must_use]
    pub fn with_terminal_colors(mut self, colors: bool) -> Self {
        self.terminal_colors = colors;
        self
    }

    /// Wrap this config in an Arc for sharing across format calls
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
