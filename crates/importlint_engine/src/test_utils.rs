//! Test utilities for importlint_engine.

use crate::{EngineError, SortConfig, SortEngine, SortResult};

/// Engine that returns a canned result regardless of input.
pub struct CannedEngine {
    result: SortResult,
}

impl CannedEngine {
    /// Creates an engine that always reports `result`.
    pub fn new(result: SortResult) -> Self {
        Self { result }
    }
}

impl SortEngine for CannedEngine {
    fn sort(&self, _contents: &str, config: &SortConfig) -> Result<SortResult, EngineError> {
        Ok(self
            .result
            .clone()
            .with_add_imports(config.forced_imports()))
    }
}

/// Engine that reports the input unchanged.
pub struct IdentityEngine;

impl SortEngine for IdentityEngine {
    fn sort(&self, contents: &str, config: &SortConfig) -> Result<SortResult, EngineError> {
        Ok(SortResult::from_contents(contents, contents).with_add_imports(config.forced_imports()))
    }
}

/// Engine whose sort always fails.
pub struct FailingEngine {
    message: String,
}

impl FailingEngine {
    /// Creates an engine that always raises `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl SortEngine for FailingEngine {
    fn sort(&self, _contents: &str, _config: &SortConfig) -> Result<SortResult, EngineError> {
        Err(EngineError::raised(self.message.clone()))
    }
}

/// Engine that always reports a skip.
pub struct SkippingEngine;

impl SortEngine for SkippingEngine {
    fn sort(&self, _contents: &str, _config: &SortConfig) -> Result<SortResult, EngineError> {
        Err(EngineError::Skipped)
    }
}
