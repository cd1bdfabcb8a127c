//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity level.
///
/// Ordering is `All < Error < Warn < Info < Debug`: a logger configured at
/// `Info` emits entries at `All`, `Error`, `Warn` and `Info`, while `Debug`
/// is the most verbose threshold. The formatter only uses the level's name;
/// filtering happens on the logger handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Level {
    All = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Terminal color for this level, `None` for uncolored levels.
    pub fn color_code(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            Level::Error => Some(Red),
            Level::Warn => Some(Yellow),
            Level::Debug => Some(Magenta),
            Level::Info | Level::All => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Level::All),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
