//! Core formatting types and the logger handle

pub mod attr;
pub mod config;
pub mod dedupe;
pub mod duration;
pub mod error;
pub mod flatten;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod sink;
pub mod sort;
pub mod term;

pub use attr::{Attr, AttrValue, ToJson};
pub use config::{DurationFormat, FormatConfig, TimeFormat};
pub use duration::TimeUnit;
pub use error::{LogError, Result};
pub use formatter::{Formatter, OutputFormat};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::Sink;
pub use term::TermRenderer;
