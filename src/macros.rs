//! Logging macros for ergonomic message formatting and attribute lists.
//!
//! # Examples
//!
//! ```
//! use kvlog::prelude::*;
//! use kvlog::{attrs, info};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server listening on port {}", 8080);
//!
//! let logger = logger.with(attrs! { "service" => "api", "replica" => 3 });
//! info!(logger, "ready");
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use kvlog::prelude::*;
/// # let logger = Logger::new();
/// use kvlog::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Build an attribute list from `key => value` pairs.
///
/// Values take any type convertible to [`crate::core::AttrValue`].
///
/// # Examples
///
/// ```
/// use kvlog::attrs;
///
/// let list = attrs! { "user" => "alice", "count" => 5, "ok" => true };
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::core::Attr>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$($crate::core::Attr::new($key, $value)),+]
    };
}
