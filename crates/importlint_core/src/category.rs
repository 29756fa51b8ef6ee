//! Diagnostic categories and records.

use serde::{Deserialize, Serialize};

/// The closed set of deviations this plugin reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// An import in the wrong position.
    Misordered,
    /// No configuration file found.
    NoConfig,
    /// A blank line the sorted output requires is absent.
    MissingBlankLine,
    /// A blank line the sorted output removes.
    UnexpectedBlankLine,
    /// A forced import is absent.
    MissingImport,
}

impl Category {
    /// Stable machine-readable code, the first token of every message.
    pub fn code(self) -> &'static str {
        match self {
            Self::Misordered => "I001",
            Self::NoConfig => "I002",
            Self::MissingBlankLine => "I003",
            Self::UnexpectedBlankLine => "I004",
            Self::MissingImport => "I005",
        }
    }

    /// Human-readable message template.
    pub fn message(self) -> &'static str {
        match self {
            Self::Misordered => "found an import in the wrong position",
            Self::NoConfig => "no configuration found (.importlint.jsonc or .importlint.json)",
            Self::MissingBlankLine => "expected 1 blank line in imports, found 0",
            Self::UnexpectedBlankLine => "found an unexpected blank line in imports",
            Self::MissingImport => "found an unexpected missing import",
        }
    }
}

/// A single deviation reported to the host linter.
///
/// Created fresh per check, never mutated afterwards. Emission order
/// follows diff traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based source line; 0 for file-level diagnostics such as I002.
    pub line: usize,

    /// Always 0; the plugin reports whole lines.
    pub column: usize,

    /// The deviation category.
    pub category: Category,

    /// Rendered message, code prefix included.
    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic at `line` for `category`.
    pub fn new(line: usize, category: Category) -> Self {
        Self {
            line,
            column: 0,
            category,
            message: format!("{} {}", category.code(), category.message()),
        }
    }

    /// Appends a raw diff trace to the message.
    pub fn with_trace(mut self, trace: &str) -> Self {
        self.message.push_str(trace);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Category::Misordered, "I001")]
    #[case(Category::NoConfig, "I002")]
    #[case(Category::MissingBlankLine, "I003")]
    #[case(Category::UnexpectedBlankLine, "I004")]
    #[case(Category::MissingImport, "I005")]
    fn test_codes_are_stable(#[case] category: Category, #[case] code: &str) {
        assert_eq!(category.code(), code);
    }

    #[test]
    fn test_message_starts_with_code() {
        let diag = Diagnostic::new(4, Category::Misordered);

        assert_eq!(diag.line, 4);
        assert_eq!(diag.column, 0);
        assert_eq!(diag.message, "I001 found an import in the wrong position");
    }

    #[test]
    fn test_with_trace_suffixes_message() {
        let diag = Diagnostic::new(1, Category::MissingBlankLine).with_trace("\n\n-import os\n");

        assert!(diag.message.starts_with("I003 "));
        assert!(diag.message.ends_with("-import os\n"));
    }

    #[test]
    fn test_sorts_by_line_first() {
        let mut diags = vec![
            Diagnostic::new(9, Category::UnexpectedBlankLine),
            Diagnostic::new(2, Category::MissingBlankLine),
            Diagnostic::new(4, Category::Misordered),
        ];
        diags.sort();

        let lines: Vec<usize> = diags.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 4, 9]);
    }

    #[test]
    fn test_diagnostic_serialization() {
        let diag = Diagnostic::new(1, Category::MissingImport);
        let json = serde_json::to_string(&diag).unwrap();

        assert!(json.contains("missing_import"));
        assert!(json.contains("I005"));
    }
}
