//! Main logger handle
//!
//! The handle accumulates attributes and dispatches formatted lines to its
//! sinks. Attributes are stored most-recently-added first: `with` and `attr`
//! push onto the front of a deque in O(1), and the formatter restores
//! insertion order by reversing. Child handles share the sink list and the
//! configuration; each owns its attribute list.

use super::{
    attr::{Attr, AttrValue},
    config::FormatConfig,
    error::Result,
    formatter::{Formatter, OutputFormat},
    level::Level,
    sink::Sink,
    term::TermRenderer,
};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    max_level: Level,
    format: OutputFormat,
    formatter: Formatter,
    term: TermRenderer,
    attrs: VecDeque<Attr>,
    sinks: Arc<RwLock<Vec<Box<dyn Sink>>>>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logger with default configuration and no sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Child logger carrying additional attributes.
    ///
    /// Attributes are given in the order they were decided; later entries
    /// are newer and win duplicate-key collisions under strict formatting.
    #[must_use]
    pub fn with(&self, attrs: Vec<Attr>) -> Self {
        let mut child = self.clone();
        for attr in attrs {
            child.attrs.push_front(attr);
        }
        child
    }

    /// Child logger with one additional scalar attribute.
    #[must_use]
    pub fn attr<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.with(vec![Attr::new(key, value)])
    }

    pub fn set_max_level(&mut self, level: Level) {
        self.max_level = level;
    }

    pub fn max_level(&self) -> Level {
        self.max_level
    }

    /// Whether an entry at `level` would be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    pub fn flush(&self) -> Result<()> {
        for sink in self.sinks.write().iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    pub fn log(&self, level: Level, msg: impl AsRef<str>) {
        self.log_with(level, msg, Vec::new());
    }

    /// Log with one-off attributes appended after the handle's own.
    pub fn log_with(&self, level: Level, msg: impl AsRef<str>, attrs: Vec<Attr>) {
        if !self.enabled(level) {
            return;
        }
        let raw = self.raw_attrs(attrs);
        let line = match self.format {
            OutputFormat::Json => {
                self.formatter.format_json(Utc::now(), level, msg.as_ref(), &raw)
            }
            OutputFormat::Logfmt => {
                self.formatter.format_logfmt(Utc::now(), level, msg.as_ref(), &raw)
            }
            OutputFormat::Term => self.term.format(level, msg.as_ref(), &raw),
        };
        self.write(level, &line);
    }

    /// Log a bare attribute line with no forced metadata. Nothing is written
    /// when the formatter reports no output.
    pub fn log_attrs(&self, level: Level, attrs: Vec<Attr>) {
        if !self.enabled(level) {
            return;
        }
        let raw = self.raw_attrs(attrs);
        let line = match self.format {
            OutputFormat::Json => self.formatter.attrs_json(&raw),
            OutputFormat::Logfmt | OutputFormat::Term => self.formatter.attrs_logfmt(&raw),
        };
        if !line.is_empty() {
            self.write(level, &line);
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        self.log(Level::Error, msg);
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.log(Level::Warn, msg);
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.log(Level::Info, msg);
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        self.log(Level::Debug, msg);
    }

    /// Raw list for the formatter: most-recently-added first. One-off
    /// attributes are newer than everything on the handle.
    fn raw_attrs(&self, extra: Vec<Attr>) -> Vec<Attr> {
        let mut raw = Vec::with_capacity(extra.len() + self.attrs.len());
        raw.extend(extra.into_iter().rev());
        raw.extend(self.attrs.iter().cloned());
        raw
    }

    /// Fan out to every sink; one failing sink never blocks the others.
    fn write(&self, level: Level, line: &str) {
        for sink in self.sinks.write().iter_mut() {
            if let Err(e) = sink.write_line(level, line) {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LoggerBuilder {
    config: FormatConfig,
    format: OutputFormat,
    max_level: Level,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FormatConfig::default(),
            format: OutputFormat::default(),
            max_level: Level::Info,
            sinks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let config = self.config.shared();
        Logger {
            max_level: self.max_level,
            format: self.format,
            formatter: Formatter::new(Arc::clone(&config)),
            term: TermRenderer::new(config),
            attrs: VecDeque::new(),
            sinks: Arc::new(RwLock::new(self.sinks)),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Sink capturing lines for assertions.
    struct CaptureSink(Arc<Mutex<Vec<(Level, String)>>>);

    impl Sink for CaptureSink {
        fn write_line(&mut self, level: Level, line: &str) -> Result<()> {
            self.0.lock().push((level, line.to_string()));
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn capture_logger(config: FormatConfig, format: OutputFormat) -> (Logger, Arc<Mutex<Vec<(Level, String)>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .with_config(config)
            .with_format(format)
            .with_sink(Box::new(CaptureSink(Arc::clone(&lines))))
            .build();
        (logger, lines)
    }

    #[test]
    fn test_level_filtering() {
        let (logger, lines) = capture_logger(FormatConfig::new(), OutputFormat::Logfmt);
        logger.debug("hidden");
        logger.info("shown");
        logger.error("also shown");

        let lines = lines.lock();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_handle_attrs_render_in_insertion_order() {
        let config = FormatConfig::new().with_time_format(crate::core::TimeFormat::Omit);
        let (logger, lines) = capture_logger(config, OutputFormat::Logfmt);
        logger
            .attr("a", "b")
            .attr("test", 1)
            .log(Level::Info, "test");

        let lines = lines.lock();
        assert_eq!(lines[0].1, "level=INFO msg=test a=b test=1");
    }

    #[test]
    fn test_one_off_attrs_are_newest() {
        let config = FormatConfig::new()
            .with_time_format(crate::core::TimeFormat::Omit)
            .with_strict(true);
        let (logger, lines) = capture_logger(config, OutputFormat::Logfmt);
        logger
            .attr("k", "old")
            .log_with(Level::Info, "m", vec![Attr::string("k", "new")]);

        let lines = lines.lock();
        assert_eq!(lines[0].1, "level=INFO msg=m k=new");
    }

    #[test]
    fn test_child_logger_does_not_touch_parent() {
        let config = FormatConfig::new().with_time_format(crate::core::TimeFormat::Omit);
        let (logger, lines) = capture_logger(config, OutputFormat::Logfmt);
        let child = logger.attr("request_id", "abc");

        logger.info("parent");
        child.info("child");

        let lines = lines.lock();
        assert_eq!(lines[0].1, "level=INFO msg=parent");
        assert_eq!(lines[1].1, "level=INFO msg=child request_id=abc");
    }

    #[test]
    fn test_log_attrs_skips_empty_output() {
        let (logger, lines) = capture_logger(FormatConfig::new(), OutputFormat::Logfmt);
        logger.log_attrs(Level::Info, vec![]);
        assert!(lines.lock().is_empty());

        logger.log_attrs(Level::Info, vec![Attr::int("n", 1)]);
        assert_eq!(lines.lock()[0].1, "n=1");
    }

    #[test]
    fn test_error_routed_with_level() {
        let (logger, lines) = capture_logger(FormatConfig::new(), OutputFormat::Logfmt);
        logger.error("boom");
        assert_eq!(lines.lock()[0].0, Level::Error);
    }

    #[test]
    fn test_set_max_level() {
        let (mut logger, lines) = capture_logger(FormatConfig::new(), OutputFormat::Logfmt);
        logger.set_max_level(Level::Debug);
        logger.debug("now visible");
        assert_eq!(lines.lock().len(), 1);
    }

    /// Sink failing on every write.
    struct FailingSink;

    impl Sink for FailingSink {
        fn write_line(&mut self, _level: Level, _line: &str) -> Result<()> {
            Err(crate::core::LogError::sink("failing", "injected failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .with_sink(Box::new(FailingSink))
            .with_sink(Box::new(CaptureSink(Arc::clone(&lines))))
            .build();

        logger.info("still delivered");

        let lines = lines.lock();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.contains("msg=\"still delivered\""));
    }

    #[test]
    fn test_term_format_dispatch() {
        let config = FormatConfig::new().with_terminal_colors(false);
        let (logger, lines) = capture_logger(config, OutputFormat::Term);
        logger.attr("n", 1).info("hello");
        assert_eq!(lines.lock()[0].1, "INFO   hello  n=1");
    }
}
