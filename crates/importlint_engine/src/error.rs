//! Engine error types.

use thiserror::Error;

/// Errors surfaced by a sort engine integration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine declined to process the file (skip directive or skip
    /// glob). Not a failure.
    #[error("file skipped by sort engine")]
    Skipped,

    /// The engine raised a tool-specific error while sorting.
    #[error("sort engine error: {0}")]
    Raised(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Creates a tool-specific engine error.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }

    /// Returns whether this error means "skipped", i.e. zero diagnostics
    /// rather than a malfunction.
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_is_not_a_failure() {
        assert!(EngineError::Skipped.is_skip());
        assert!(!EngineError::raised("boom").is_skip());
    }

    #[test]
    fn test_raised_message() {
        let err = EngineError::raised("unbalanced parenthesis");
        assert_eq!(err.to_string(), "sort engine error: unbalanced parenthesis");
    }
}
