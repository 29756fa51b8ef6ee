//! Pre-diff normalization of engine line buffers.

use std::collections::BTreeSet;

/// Explodes entries containing embedded line terminators.
///
/// The engine may hand back a wrapped multi-line import as one combined
/// string in `out_lines` while `in_lines` keeps one entry per physical
/// line; positional diffing needs both sides aligned or every line number
/// after the first wrapped group is wrong.
pub fn split_wrapped_lines(lines: &mut Vec<String>) {
    let mut idx = 0;
    while idx < lines.len() {
        if lines[idx].contains('\n') {
            let wrapped = lines.remove(idx);
            for (offset, part) in wrapped.lines().enumerate() {
                lines.insert(idx + offset, part.to_string());
            }
        } else {
            idx += 1;
        }
    }
}

/// Trims trailing blank entries (and forced-import placeholders) down to
/// exactly one blank at end of file.
///
/// The engine force-normalizes EOF blanks itself; without this the
/// difference would surface as a spurious blank-line diagnostic
/// duplicating the host linter's own whitespace rule. A buffer of exactly
/// one blank entry is left untouched.
pub fn normalize_eof(lines: &mut Vec<String>, forced: &BTreeSet<String>) {
    let removable = |line: &String| {
        let trimmed = line.trim();
        trimmed.is_empty() || forced.contains(trimmed)
    };

    while lines.len() > 1 && lines.last().is_some_and(removable) {
        lines.pop();
    }

    if lines.last().is_some_and(|line| !removable(line)) {
        lines.push(String::new());
    }
}
