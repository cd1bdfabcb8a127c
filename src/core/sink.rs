//! Sink trait for formatted log lines

use super::{error::Result, level::Level};

/// Destination for one formatted line. The formatter has already produced
/// the text; sinks only decide where it goes.
pub trait Sink: Send + Sync {
    fn write_line(&mut self, level: Level, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
