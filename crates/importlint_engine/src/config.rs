//! Sort engine configuration.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings handed to the external sort engine.
///
/// Only the options this plugin has to understand are modeled; anything
/// else the engine reads from its own configuration surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Import statements the engine always inserts when absent.
    #[serde(default)]
    pub add_imports: Vec<String>,

    /// Glob patterns for files the engine leaves untouched.
    #[serde(default)]
    pub skip: Vec<String>,

    /// Maximum line length before the engine wraps an import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_length: Option<usize>,

    /// Named formatting profile understood by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Directory the configuration was resolved from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl SortConfig {
    /// Returns the forced-import statements, trimmed, as a set.
    ///
    /// The classifiers use this to tell a forced-add insertion apart from
    /// a generic new import.
    pub fn forced_imports(&self) -> BTreeSet<String> {
        self.add_imports
            .iter()
            .map(|import| import.trim().to_string())
            .collect()
    }
}
