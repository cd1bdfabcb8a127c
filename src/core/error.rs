//! Error types for the logger surface
//!
//! The formatting core itself is infallible; errors only arise on the
//! logger/sink boundary (opening files, writing lines).

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Sink error with path context
    #[error("Sink error for '{path}': {message}")]
    SinkError { path: String, message: String },
}

impl LogError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error with path context
    pub fn sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::SinkError {
            path: path.into(),
            message: message.into(),
        }
    }
}
