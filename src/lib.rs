//! # kvlog
//!
//! Structured key/value logging with three output grammars: single-line
//! JSON, logfmt, and a colorized terminal format.
//!
//! ## Features
//!
//! - **Typed attributes**: strings, integers, floats, booleans, exact
//!   durations, nested groups, and an escape hatch for arbitrary
//!   JSON-encodable values
//! - **Duration unit inference**: key suffixes or value magnitude pick the
//!   time unit
//! - **Deterministic output**: configurable key ordering and duplicate-key
//!   collapsing
//! - **Thread safe**: formatting is a pure function over a shared immutable
//!   configuration

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Attr, AttrValue, DurationFormat, FormatConfig, Formatter, Level, LogError, Logger,
        LoggerBuilder, OutputFormat, Result, Sink, TermRenderer, TimeFormat, TimeUnit, ToJson,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    Attr, AttrValue, DurationFormat, FormatConfig, Formatter, Level, LogError, Logger,
    LoggerBuilder, OutputFormat, Result, Sink, TermRenderer, TimeFormat, TimeUnit, ToJson,
};
pub use sinks::{ConsoleSink, FileSink};
