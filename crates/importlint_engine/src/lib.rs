//! # importlint_engine
//!
//! Contract between importlint and the external import-sorting engine.
//!
//! This crate provides:
//! - The [`SortEngine`] trait that engine integrations implement
//! - The [`SortResult`] reported for one file
//! - The [`SortConfig`] settings handed to the engine
//!
//! The engine itself is a black box: given file contents and a
//! configuration it returns the before/after line buffers of its rewrite,
//! or signals that the file was intentionally skipped. How it orders
//! imports is its own business; importlint only diffs the outcome.
//!
//! ## Example
//!
//! ```rust,ignore
//! use importlint_engine::{SortConfig, SortEngine};
//!
//! let result = engine.sort("import os\n", &SortConfig::default())?;
//! if !result.is_effectively_skipped() {
//!     println!("{} -> {} lines", result.in_lines.len(), result.out_lines.len());
//! }
//! ```

mod config;
mod error;
mod result;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::SortConfig;
pub use error::EngineError;
pub use result::SortResult;

/// An integration with an external import-sorting engine.
///
/// Implementations must be reentrant: a multi-file linting session may
/// call `sort` from several files' checks without coordination.
pub trait SortEngine {
    /// Sorts `contents` and reports both sides of the rewrite.
    ///
    /// Returns [`EngineError::Skipped`] when a skip directive applies to
    /// the file. Any other error means the engine failed and produced no
    /// usable result.
    fn sort(&self, contents: &str, config: &SortConfig) -> Result<SortResult, EngineError>;
}
