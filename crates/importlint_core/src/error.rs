//! Check error types.

use thiserror::Error;

/// Errors that can occur while checking a file.
///
/// Engine failures are not part of this taxonomy: they are local to one
/// file, downgraded to a warning, and yield zero diagnostics so a
/// multi-file run continues.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
