//! Checkbox task counting

use regex::Regex;
use std::sync::OnceLock;

/// Task line of any status, top-level or nested
fn task_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*- \[(.)\] ").unwrap())
}

/// Counts of task lines by checkbox status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub done: usize,
    pub open: usize,
    pub in_progress: usize,
}

impl TaskCounts {
    pub fn total(&self) -> usize {
        self.done + self.open + self.in_progress
    }
}

/// Count task lines in a note's text by status.
///
/// `x`/`X` count as done, a space as open, `>` as in progress. Any other
/// status (cancelled markers and the like) is ignored.
pub fn count_task_statuses(text: &str) -> TaskCounts {
    let mut counts = TaskCounts::default();

    for line in text.split('\n') {
        if let Some(caps) = task_line_regex().captures(line) {
            match &caps[1] {
                "x" | "X" => counts.done += 1,
                " " => counts.open += 1,
                ">" => counts.in_progress += 1,
                _ => {}
            }
        }
    }

    counts
}
