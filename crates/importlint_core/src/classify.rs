//! Diff classification of engine rewrites.
//!
//! Two entry points covering the two report formats an engine can
//! produce: paired before/after line buffers, or a unified-diff text
//! block. Both emit `(line, category)` pairs in diff traversal order,
//! monotonic in line number except for synthesized insert positions
//! sharing a line with the preceding delete.

use std::collections::BTreeSet;

use similar::{ChangeTag, TextDiff};

use crate::category::Category;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Classifies a before/after pair of line buffers.
///
/// Expects both buffers already normalized: wrapped entries split
/// ([`crate::split_wrapped_lines`]) and EOF blanks trimmed
/// ([`crate::normalize_eof`]). Line numbers count consumed
/// before-positions, so each emitted line is the 1-based physical line of
/// the deviation in the unsorted file.
pub fn classify_sequences(
    in_lines: &[String],
    out_lines: &[String],
    forced: &BTreeSet<String>,
) -> Vec<(usize, Category)> {
    let before: Vec<&str> = in_lines.iter().map(String::as_str).collect();
    let after: Vec<&str> = out_lines.iter().map(String::as_str).collect();
    let diff = TextDiff::from_slices(&before, &after);

    let mut findings = Vec::new();
    let mut line_num = 0usize;

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => line_num += 1,
            ChangeTag::Delete => {
                line_num += 1;
                if is_blank(change.value()) {
                    findings.push((line_num, Category::UnexpectedBlankLine));
                } else {
                    findings.push((line_num, Category::Misordered));
                }
            }
            ChangeTag::Insert => {
                // Insertions consume no before-position.
                if is_blank(change.value()) {
                    findings.push((line_num + 1, Category::MissingBlankLine));
                } else if forced.contains(change.value().trim()) {
                    findings.push((line_num + 1, Category::MissingImport));
                }
                // Any other insertion is the far side of a relocation
                // already reported as misordered on its delete side.
            }
        }
    }

    findings
}

/// Classifies a unified-diff report of the same rewrite.
///
/// A hunk header resets the line counter to the before-side start it
/// declares; lines preceding the first valid header are ignored. Non-blank
/// additions are buffered for the whole scan because a moved line shows up
/// as both a removal and an addition, possibly far apart, and only the
/// removal side is reported.
pub fn classify_unified_diff(diff_text: &str) -> Vec<(usize, Category)> {
    let mut findings = Vec::new();
    let mut line_num = 0usize;
    let mut moved: Vec<&str> = Vec::new();
    let mut additions: Vec<(usize, &str)> = Vec::new();

    for line in diff_text.lines() {
        if line.starts_with("@@") {
            line_num = parse_hunk_start(line).unwrap_or(0);
            continue;
        }
        if line_num == 0 {
            // Preamble, or everything after a malformed header.
            continue;
        }
        if let Some(removed) = line.strip_prefix('-') {
            if is_blank(removed) {
                findings.push((line_num, Category::UnexpectedBlankLine));
            } else {
                moved.push(removed);
                findings.push((line_num, Category::Misordered));
            }
            line_num += 1;
        } else if let Some(added) = line.strip_prefix('+') {
            if is_blank(added) {
                // Blank additions consume no before-position.
                findings.push((line_num, Category::MissingBlankLine));
            } else {
                additions.push((line_num, added));
            }
        } else if line.starts_with(' ') {
            line_num += 1;
        }
    }

    // Additions that are not the far side of a relocation are genuinely
    // missing imports.
    for (line, content) in additions {
        if !moved.contains(&content) {
            findings.push((line, Category::MissingImport));
        }
    }

    findings
}

/// Extracts the before-side starting line from a `@@ -l,s +l,s @@` header.
fn parse_hunk_start(header: &str) -> Option<usize> {
    let rest = header.get(4..)?;
    rest.split(' ').next()?.split(',').next()?.parse().ok()
}
