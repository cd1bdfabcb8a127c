//! Console sink implementation

use crate::core::{Level, Result, Sink};

/// Writes lines to standard output, routing ERROR to standard error.
pub struct ConsoleSink {
    stderr_for_errors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stderr_for_errors: true,
        }
    }

    /// Send every level to stdout, including errors.
    ///
    /// ```
    /// use kvlog::{ConsoleSink, Level, Sink};
    ///
    /// let mut sink = ConsoleSink::new().stdout_only();
    /// sink.write_line(Level::Error, "goes to stdout").unwrap();
    /// ```
    #[must_use]
    pub fn stdout_only(mut self) -> Self {
        self.stderr_for_errors = false;
        self
    }

    fn uses_stderr(&self, level: Level) -> bool {
        self.stderr_for_errors && level == Level::Error
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, level: Level, line: &str) -> Result<()> {
        if self.uses_stderr(level) {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_sink_writes() {
        let mut sink = ConsoleSink::new();
        assert!(sink.write_line(Level::Info, "info line").is_ok());
        assert!(sink.write_line(Level::Error, "error line").is_ok());
        assert!(sink.flush().is_ok());
    }

    #[test]
    fn test_error_routing_toggle() {
        let sink = ConsoleSink::new();
        assert!(sink.uses_stderr(Level::Error));
        assert!(!sink.uses_stderr(Level::Warn));
        assert!(!sink.uses_stderr(Level::Info));

        let sink = ConsoleSink::new().stdout_only();
        assert!(!sink.uses_stderr(Level::Error));
    }

    #[test]
    fn test_stdout_only_writes() {
        let mut sink = ConsoleSink::new().stdout_only();
        assert!(sink.write_line(Level::Error, "error line").is_ok());
        assert!(sink.flush().is_ok());
    }

    #[test]
    fn test_console_sink_name() {
        assert_eq!(ConsoleSink::new().name(), "console");
    }
}
