//! # importlint_core
//!
//! Core of importlint: turns an import-sort engine's rewrite of a file
//! into line-numbered diagnostics for a host linter.
//!
//! This crate provides:
//! - The [`Checker`] orchestrating one file's check
//! - The diff classifiers over line sequences and unified-diff reports
//! - Pre-diff normalizers for wrapped imports and end-of-file blanks
//! - Configuration-file discovery
//!
//! ## Example
//!
//! ```rust,ignore
//! use importlint_core::{Checker, CheckOptions};
//!
//! let checker = Checker::new(engine).with_options(CheckOptions::default());
//! for diagnostic in checker.check_path(Path::new("app/models.py"))? {
//!     println!("{}:{} {}", diagnostic.line, diagnostic.column, diagnostic.message);
//! }
//! ```

mod category;
mod checker;
mod classify;
mod config;
mod error;
mod normalize;

pub use category::{Category, Diagnostic};
pub use checker::{CheckOptions, Checker};
pub use classify::{classify_sequences, classify_unified_diff};
pub use config::{CONFIG_FILENAMES, ConfigResolver};
pub use error::CheckError;
pub use normalize::{normalize_eof, split_wrapped_lines};

pub use importlint_engine::{EngineError, SortConfig, SortEngine, SortResult};
