//! Task-block extraction with source line accounting
//!
//! A task block is either a level-3-to-6 heading section that contains at
//! least one unfinished (`[ ]`) or in-progress (`[>]`) top-level task, or a
//! loose top-level task line with its indented continuation lines. Every
//! block records the exact 0-based source lines that must be removed if the
//! block is moved elsewhere, so extraction and deletion stay in lockstep.

use regex::Regex;
use std::sync::OnceLock;

fn section_heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#{3,6}\s+").unwrap())
}

fn any_heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#{1,6}\s+").unwrap())
}

/// Top-level task line with status ` ` (unfinished) or `>` (in progress)
fn open_task_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^- \[[ >]\] ").unwrap())
}

/// Indented sub-list task of any status
fn sub_item_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s{2,}- \[.\] ").unwrap())
}

fn list_indent_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\s*)-").unwrap())
}

/// A contiguous excerpt of a note holding unfinished work.
///
/// `content` reconstructs the block's text exactly, normalized to end with a
/// single newline. `delete_lines` is the set of 0-based source line indexes
/// to remove when the block is transferred; blank lines are reproduced in
/// `content` but never deleted from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBlock {
    pub content: String,
    pub delete_lines: Vec<usize>,
}

/// Scan a note's text into task blocks.
///
/// The cursor walks line by line. A 3-to-6-level heading opens a section that
/// runs to the next heading of any level or end of text; the section emits a
/// block only if it holds at least one open top-level task. Outside sections,
/// an open top-level task starts a loose block. Anything else is skipped.
pub fn extract_unfinished_tasks(text: &str) -> Vec<TaskBlock> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        if section_heading_regex().is_match(lines[i]) {
            let section_end = section_extent(&lines, i);
            let has_open_task = lines[i + 1..section_end]
                .iter()
                .any(|line| open_task_regex().is_match(line));

            if has_open_task {
                blocks.push(section_block(&lines, i, section_end));
            }
            i = section_end;
        } else if open_task_regex().is_match(lines[i]) {
            let (block, next) = loose_block(&lines, i);
            blocks.push(block);
            i = next;
        } else {
            i += 1;
        }
    }

    blocks
}

/// End of the section opened at `start`: index of the next heading of any
/// level, or the line count.
fn section_extent(lines: &[&str], start: usize) -> usize {
    let mut j = start + 1;
    while j < lines.len() {
        if any_heading_regex().is_match(lines[j]) {
            break;
        }
        j += 1;
    }
    j
}

fn section_block(lines: &[&str], start: usize, end: usize) -> TaskBlock {
    let mut captured = String::new();
    let mut delete_lines = Vec::new();

    for (idx, line) in lines.iter().enumerate().take(end).skip(start + 1) {
        let is_task = open_task_regex().is_match(line);
        let is_blank = line.trim().is_empty();
        let is_sub_item = sub_item_regex().is_match(line);

        if is_task || is_blank || is_sub_item {
            captured.push_str(line);
            captured.push('\n');
            if is_task || is_sub_item {
                delete_lines.push(idx);
            }
        }
    }

    // The heading is only removed when nothing it governs survives the
    // deletion; a completed sibling task keeps its heading in the source.
    let leaves_orphans = lines[start + 1..end].iter().enumerate().any(|(off, line)| {
        let idx = start + 1 + off;
        !line.trim().is_empty() && !delete_lines.contains(&idx)
    });
    if !leaves_orphans {
        delete_lines.insert(0, start);
    }

    TaskBlock {
        content: format!("{}\n{}", lines[start], normalize_block(&captured)),
        delete_lines,
    }
}

fn loose_block(lines: &[&str], start: usize) -> (TaskBlock, usize) {
    let indent = list_indent_regex()
        .captures(lines[start])
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    let continuation_prefix = format!("{} ", indent);

    let mut captured = String::from(lines[start]);
    captured.push('\n');
    let mut delete_lines = vec![start];

    let mut j = start + 1;
    while j < lines.len() {
        let next = lines[j];
        let is_blank = next.trim().is_empty();
        if any_heading_regex().is_match(next) || (!next.starts_with(&continuation_prefix) && !is_blank)
        {
            break;
        }
        captured.push_str(next);
        captured.push('\n');
        if !is_blank {
            delete_lines.push(j);
        }
        j += 1;
    }

    (
        TaskBlock {
            content: normalize_block(&captured),
            delete_lines,
        },
        j,
    )
}

/// Strip leading blank lines and collapse trailing newlines to exactly one.
fn normalize_block(text: &str) -> String {
    let trimmed = text.trim_start_matches('\n');
    if trimmed.ends_with('\n') {
        format!("{}\n", trimmed.trim_end_matches('\n'))
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_blocks() {
        assert!(extract_unfinished_tasks("").is_empty());
    }

    #[test]
    fn test_done_only_section_yields_no_blocks() {
        let text = "### Tasks\n- [x] Shipped\n- [X] Also shipped\n";
        assert!(extract_unfinished_tasks(&text).is_empty());
    }

    #[test]
    fn test_prose_only_text_yields_no_blocks() {
        let text = "# Journal\n\nWrote some notes today.\n\n## Log\nMore prose.\n";
        assert!(extract_unfinished_tasks(&text).is_empty());
    }

    #[test]
    fn test_section_block_captures_open_and_in_progress() {
        let text = "### 🎯 Tasks\n- [ ] Write report\n- [x] Send email\n- [>] Call client\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(
            block.content,
            "### 🎯 Tasks\n- [ ] Write report\n- [>] Call client\n"
        );
        // open and in-progress tasks are deletable; the done line is not
        assert!(block.delete_lines.contains(&1));
        assert!(block.delete_lines.contains(&3));
        assert!(!block.delete_lines.contains(&2));
    }

    #[test]
    fn test_heading_kept_when_done_sibling_survives() {
        let text = "### Tasks\n- [ ] Open\n- [x] Done\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        // deleting the heading would orphan the surviving done task
        assert_eq!(blocks[0].delete_lines, vec![1]);
    }

    #[test]
    fn test_heading_deleted_when_section_vacates() {
        let text = "### Tasks\n- [ ] Only open\n\n- [>] Another\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].delete_lines, vec![0, 1, 3]);
    }

    #[test]
    fn test_prose_in_section_keeps_heading() {
        let text = "#### Plans\nSome context sentence.\n- [ ] Open item\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        // the prose line is neither captured nor deleted, so the heading stays
        assert_eq!(blocks[0].delete_lines, vec![2]);
        assert_eq!(blocks[0].content, "#### Plans\n- [ ] Open item\n");
    }

    #[test]
    fn test_section_captures_sub_items_of_any_status() {
        let text = "### Tasks\n- [ ] Parent\n  - [x] Done child\n  - [ ] Open child\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert!(block.content.contains("  - [x] Done child"));
        assert!(block.content.contains("  - [ ] Open child"));
        assert_eq!(block.delete_lines, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_section_ends_at_next_heading() {
        let text = "### Tasks\n- [ ] Carry me\n## Log\n- [ ] Separate loose task\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "### Tasks\n- [ ] Carry me\n");
        assert_eq!(blocks[1].content, "- [ ] Separate loose task\n");
        assert_eq!(blocks[1].delete_lines, vec![3]);
    }

    #[test]
    fn test_level_two_heading_does_not_open_section() {
        // only levels 3-6 open sections; tasks after ## are loose blocks
        let text = "## Week\n- [ ] Loose under level two\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "- [ ] Loose under level two\n");
        assert_eq!(blocks[0].delete_lines, vec![1]);
    }

    #[test]
    fn test_loose_block_with_continuations() {
        let text = "- [ ] Pack bags\n  - [ ] Socks\n\n  note to self\nUnrelated prose\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        assert_eq!(
            block.content,
            "- [ ] Pack bags\n  - [ ] Socks\n\n  note to self\n"
        );
        // the blank continuation line is reproduced but never deleted
        assert_eq!(block.delete_lines, vec![0, 1, 3]);
    }

    #[test]
    fn test_loose_block_stops_at_heading() {
        let text = "- [>] Ongoing\n### Next section\n- [x] Done\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "- [>] Ongoing\n");
    }

    #[test]
    fn test_done_loose_task_is_skipped() {
        let text = "- [x] Finished standalone\n- [ ] Still open\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "- [ ] Still open\n");
        assert_eq!(blocks[0].delete_lines, vec![1]);
    }

    #[test]
    fn test_trailing_blank_lines_trimmed_from_content() {
        let text = "### Tasks\n- [ ] Open\n\n\n\n## Next\n";
        let blocks = extract_unfinished_tasks(text);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "### Tasks\n- [ ] Open\n");
    }

    #[test]
    fn test_no_line_claimed_twice() {
        let text = "### A\n- [ ] one\n### B\n- [ ] two\n- [ ] three\n\n- [ ] loose\n";
        let blocks = extract_unfinished_tasks(text);

        let mut seen = std::collections::HashSet::new();
        for block in &blocks {
            for idx in &block.delete_lines {
                assert!(seen.insert(*idx), "line {} claimed twice", idx);
            }
        }
    }

    #[test]
    fn test_round_trip_line_accounting() {
        // A document whose sections vacate completely: the union of deleted
        // lines must reproduce exactly the non-blank lines of all contents.
        let text = "### A\n- [ ] one\n  - [x] sub\n\n### B\n- [>] two\n\n- [ ] loose\n  more\n";
        let blocks = extract_unfinished_tasks(text);

        let lines: Vec<&str> = text.split('\n').collect();
        let mut deleted: Vec<usize> = blocks
            .iter()
            .flat_map(|b| b.delete_lines.iter().copied())
            .collect();
        deleted.sort_unstable();

        let removed: Vec<&str> = deleted.iter().map(|&i| lines[i]).collect();
        let expected: Vec<&str> = blocks
            .iter()
            .flat_map(|b| b.content.lines())
            .filter(|l| !l.trim().is_empty())
            .collect();
        assert_eq!(removed, expected);
    }
}
