//! Human-oriented terminal rendering
//!
//! Layered on the logfmt serializer with `strict` and value-with-units
//! durations forced, regardless of the ambient configuration. The line is
//! `LEVEL  message  key=value ...` with the level padded to five columns and
//! colorized, the message bold, and the attribute tail rendered through the
//! bare logfmt variant.
//!
//! Wrapping is a hard split into fixed-size grapheme-cluster chunks, not
//! word-aware. The chunk budget counts embedded ANSI escape sequences as
//! ordinary characters, so colorized lines wrap earlier than their visible
//! width; this matches the historical behavior and is kept deliberately.

use super::attr::Attr;
use super::config::{DurationFormat, FormatConfig};
use super::formatter::Formatter;
use super::level::Level;
use colored::Colorize;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Marker prepended to continuation lines after a hard wrap.
const WRAP_MARKER: &str = "| ";

#[derive(Debug, Clone)]
pub struct TermRenderer {
    formatter: Formatter,
}

impl TermRenderer {
    /// Build a renderer from the ambient configuration, forcing the knobs
    /// the terminal grammar requires.
    pub fn new(config: Arc<FormatConfig>) -> Self {
        let forced = (*config)
            .clone()
            .with_strict(true)
            .with_duration_format(DurationFormat::ValueWithUnits)
            .shared();
        Self {
            formatter: Formatter::new(forced),
        }
    }

    pub fn config(&self) -> &FormatConfig {
        self.formatter.config()
    }

    /// Compose one terminal line.
    pub fn format(&self, level: Level, msg: &str, attrs: &[Attr]) -> String {
        let config = self.formatter.config();

        let level_token = if config.terminal_colors {
            match level.color_code() {
                Some(color) => level.to_str().color(color).to_string(),
                None => level.to_str().to_string(),
            }
        } else {
            level.to_str().to_string()
        };

        let msg_token = if config.terminal_colors {
            msg.bold().to_string()
        } else {
            msg.to_string()
        };

        let mut line = format!("{level_token:<5}  {msg_token}");
        let tail = self.formatter.attrs_logfmt(attrs);
        if !tail.is_empty() {
            line.push_str("  ");
            line.push_str(&tail);
        }

        hard_wrap(&line, config.terminal_max_width)
    }
}

/// Split into fixed-size grapheme chunks and rejoin with a continuation
/// marker. Width 0 disables wrapping.
fn hard_wrap(line: &str, width: usize) -> String {
    if width == 0 {
        return line.to_string();
    }
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    if graphemes.len() <= width {
        return line.to_string();
    }
    graphemes
        .chunks(width)
        .map(|chunk| chunk.concat())
        .collect::<Vec<_>>()
        .join(&format!("\n{WRAP_MARKER}"))
}
