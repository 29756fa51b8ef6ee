//! Sort engine results.

use std::collections::BTreeSet;

/// Outcome of one engine invocation over one file's contents.
///
/// `in_lines` and `out_lines` carry no line terminators; index 0
/// corresponds to source line 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortResult {
    /// The file's lines as the engine read them.
    pub in_lines: Vec<String>,

    /// The file's lines as the engine would rewrite them.
    pub out_lines: Vec<String>,

    /// Set when the engine honored a skip directive.
    pub skipped: bool,

    /// Imports the engine was configured to force-add.
    pub add_imports: BTreeSet<String>,
}

impl SortResult {
    /// Creates a result from before/after line buffers.
    pub fn new(in_lines: Vec<String>, out_lines: Vec<String>) -> Self {
        Self {
            in_lines,
            out_lines,
            skipped: false,
            add_imports: BTreeSet::new(),
        }
    }

    /// Creates a result from raw before/after text, one entry per line.
    pub fn from_contents(before: &str, after: &str) -> Self {
        Self::new(
            before.lines().map(String::from).collect(),
            after.lines().map(String::from).collect(),
        )
    }

    /// Marks the result as skipped.
    pub fn with_skipped(mut self, skipped: bool) -> Self {
        self.skipped = skipped;
        self
    }

    /// Records the forced-import set the engine ran with.
    pub fn with_add_imports(mut self, add_imports: BTreeSet<String>) -> Self {
        self.add_imports = add_imports;
        self
    }

    /// Returns whether the engine changed anything.
    pub fn is_changed(&self) -> bool {
        self.in_lines != self.out_lines
    }

    /// Returns whether the file should be treated as skipped.
    ///
    /// Some engine versions fail to set the `skipped` flag for in-file
    /// skip directives and hand back empty line buffers instead; both
    /// signals carry the same meaning.
    pub fn is_effectively_skipped(&self) -> bool {
        self.skipped || (self.in_lines.is_empty() && self.out_lines.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_contents_splits_lines() {
        let result = SortResult::from_contents("import os\nimport sys\n", "import os\nimport sys\n");

        assert_eq!(result.in_lines, vec!["import os", "import sys"]);
        assert_eq!(result.out_lines, vec!["import os", "import sys"]);
        assert!(!result.is_changed());
    }

    #[test]
    fn test_changed_when_buffers_differ() {
        let result = SortResult::from_contents("import sys\nimport os\n", "import os\nimport sys\n");
        assert!(result.is_changed());
    }

    #[test]
    fn test_skipped_flag() {
        let result = SortResult::from_contents("import os\n", "import os\n").with_skipped(true);
        assert!(result.is_effectively_skipped());
    }

    #[test]
    fn test_empty_buffers_mean_skipped() {
        // Engine defect: skip directive honored but flag left unset.
        let result = SortResult::new(Vec::new(), Vec::new());
        assert!(!result.skipped);
        assert!(result.is_effectively_skipped());
    }

    #[test]
    fn test_non_empty_buffers_are_not_skipped() {
        let result = SortResult::from_contents("import os\n", "import os\n");
        assert!(!result.is_effectively_skipped());
    }
}
