//! Marker lookup and whole-text line edits
//!
//! These helpers operate on full-text snapshots; callers read a note, apply
//! an edit, and write the result back.

use regex::Regex;
use std::sync::OnceLock;

fn blank_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// First line whose raw text contains `token`, if any.
///
/// This is a plain-text convention: the marker is a substring match against
/// the line, not a structural document feature.
pub fn find_marker_line(text: &str, token: &str) -> Option<usize> {
    text.split('\n').position(|line| line.contains(token))
}

/// Insert a blank line followed by `payload` immediately after line `line`.
///
/// `payload` is expected to end with a newline; the remainder of the
/// document continues directly after it.
pub fn insert_below_line(text: &str, line: usize, payload: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let at = line.min(lines.len().saturating_sub(1));

    let prefix = lines[..=at].join("\n");
    let suffix = lines[at + 1..].join("\n");

    format!("{}\n\n{}{}", prefix, payload, suffix)
}

/// Remove the given 0-based lines from `text`.
///
/// Indexes are deduplicated and removed highest-first so earlier removals do
/// not shift lines that are still pending. Runs of three or more newlines in
/// the result are collapsed to one blank line and the ends are trimmed.
pub fn delete_lines(text: &str, indexes: &[usize]) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();

    let mut sorted: Vec<usize> = indexes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    for index in sorted {
        if index < lines.len() {
            lines.remove(index);
        }
    }

    let joined = lines.join("\n");
    let collapsed = blank_run_regex().replace_all(&joined, "\n\n");
    collapsed.trim().to_string()
}
