//! Single-file check logic.

use std::fs;
use std::path::Path;

use similar::TextDiff;
use tracing::{debug, warn};

use importlint_engine::{EngineError, SortConfig, SortEngine, SortResult};

use crate::category::{Category, Diagnostic};
use crate::classify::classify_sequences;
use crate::config::ConfigResolver;
use crate::error::CheckError;
use crate::normalize::{normalize_eof, split_wrapped_lines};

/// Per-call options.
///
/// Threaded into each check instead of living in process-wide state so
/// checks stay independently testable and reusable across concurrent
/// file processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Emit I002 when no configuration file was found.
    pub require_config: bool,

    /// Suffix every message with the raw diff trace.
    pub show_diff_trace: bool,
}

/// Runs the sort engine over one file's contents and classifies the
/// rewrite into diagnostics.
pub struct Checker<E> {
    engine: E,
    options: CheckOptions,
}

impl<E: SortEngine> Checker<E> {
    /// Creates a checker with default options.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            options: CheckOptions::default(),
        }
    }

    /// Sets the per-call options.
    pub fn with_options(mut self, options: CheckOptions) -> Self {
        self.options = options;
        self
    }

    /// Checks a file on disk, resolving configuration from its directory
    /// upward.
    pub fn check_path(&self, path: &Path) -> Result<Vec<Diagnostic>, CheckError> {
        let contents = fs::read_to_string(path)?;
        let start_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = ConfigResolver::discover(start_dir)?;
        self.check(&path.display().to_string(), &contents, config.as_ref())
    }

    /// Checks `contents` against an already-resolved configuration.
    ///
    /// `config` is `None` when discovery found nothing, which only
    /// matters when `require_config` is set: the check then reports I002
    /// and stops rather than second-guessing the engine's defaults.
    pub fn check(
        &self,
        name: &str,
        contents: &str,
        config: Option<&SortConfig>,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        debug!("checking {}", name);

        if config.is_none() && self.options.require_config {
            return Ok(vec![Diagnostic::new(0, Category::NoConfig)]);
        }
        let sort_config = config.cloned().unwrap_or_default();

        let result = match self.engine.sort(contents, &sort_config) {
            Ok(result) => result,
            Err(EngineError::Skipped) => return Ok(Vec::new()),
            Err(err) => {
                // Engine failures are local to one file; report nothing
                // and let the run continue.
                warn!("sort engine failed for {}: {}", name, err);
                return Ok(Vec::new());
            }
        };

        if result.is_effectively_skipped() || !result.is_changed() {
            return Ok(Vec::new());
        }

        let SortResult {
            mut in_lines,
            mut out_lines,
            add_imports,
            ..
        } = result;

        split_wrapped_lines(&mut out_lines);
        normalize_eof(&mut in_lines, &add_imports);

        let trace = self
            .options
            .show_diff_trace
            .then(|| format_trace(&in_lines, &out_lines));

        let mut diagnostics = Vec::new();
        for (line, category) in classify_sequences(&in_lines, &out_lines, &add_imports) {
            let mut diagnostic = Diagnostic::new(line, category);
            if let Some(trace) = &trace {
                diagnostic = diagnostic.with_trace(trace);
            }
            diagnostics.push(diagnostic);
        }
        Ok(diagnostics)
    }
}

/// Renders the rewrite as a trailing trace for diagnostics.
///
/// File headers and hunk markers are dropped; the remainder is framed
/// with blank lines so it reads as a block after the message text.
fn format_trace(in_lines: &[String], out_lines: &[String]) -> String {
    let before = in_lines.join("\n");
    let after = out_lines.join("\n");
    let diff = TextDiff::from_lines(&before, &after);
    let rendered = diff
        .unified_diff()
        .missing_newline_hint(false)
        .header("before", "after")
        .to_string();

    let mut valid_lines = vec![String::new()];
    valid_lines.extend(
        rendered
            .lines()
            .filter(|line| {
                let first = line.trim().split(' ').next().unwrap_or("");
                !matches!(first, "+++" | "---" | "@@" | "ERROR:")
            })
            .map(String::from),
    );
    if valid_lines.len() > 1 {
        valid_lines.insert(1, String::new());
    }
    valid_lines.push(String::new());
    valid_lines.join("\n")
}
